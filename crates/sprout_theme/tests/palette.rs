use sprout_theme::palette::{self, PaletteTheme, PRIMARY_STEP, RAMP_LEN};
use sprout_theme::{Color, PresetColor};

fn seed_grid() -> Vec<Color> {
    let mut seeds = vec![
        Color::BLACK,
        Color::WHITE,
        Color::from_hex(0x808080),
        Color::from_hex(0x1A1A1A),
        Color::from_hex(0xF0F0F0),
        Color::from_hex(0xFF0000),
        Color::from_hex(0x00FF00),
        Color::from_hex(0x0000FF),
        Color::from_hex(0xFFFF00),
    ];
    seeds.extend(PresetColor::all().iter().map(|preset| preset.color()));
    seeds
}

#[test]
fn step_six_reproduces_the_seed() {
    for seed in seed_grid() {
        for theme in [PaletteTheme::Light, PaletteTheme::Dark] {
            let ramp = palette::generate(seed, theme);
            assert_eq!(
                ramp.step(PRIMARY_STEP),
                seed,
                "{} ramp for {} should keep the seed at step 6",
                if theme.is_dark() { "dark" } else { "light" },
                seed
            );
            assert_eq!(ramp.colors().len(), RAMP_LEN);
        }
    }
}

#[test]
fn light_ramps_darken_and_dark_ramps_lighten() {
    for seed in seed_grid() {
        let light = palette::generate(seed, PaletteTheme::Light);
        let dark = palette::generate(seed, PaletteTheme::Dark);

        for step in 1..RAMP_LEN {
            assert!(
                light.step(step).luma() >= light.step(step + 1).luma(),
                "light ramp for {} not monotonic at step {}",
                seed,
                step
            );
            assert!(
                dark.step(step).luma() <= dark.step(step + 1).luma(),
                "dark ramp for {} not monotonic at step {}",
                seed,
                step
            );
        }
    }
}

#[test]
fn every_preset_palette_keeps_its_base() {
    for &preset in PresetColor::all() {
        for theme in [PaletteTheme::Light, PaletteTheme::Dark] {
            assert_eq!(
                preset.palette(theme).primary(),
                preset.color(),
                "Preset {} should reproduce its base color",
                preset
            );
        }
    }
    assert_eq!(PresetColor::all().len(), 13);
}

#[test]
fn ramps_are_valid_for_degenerate_input() {
    let seed = Color::rgba(f32::NAN, 2.0, -0.5, f32::INFINITY);
    for theme in [PaletteTheme::Light, PaletteTheme::Dark] {
        let ramp = palette::generate(seed, theme);
        assert!(ramp.iter().all(|color| color.is_valid()));
        assert_eq!(ramp.primary(), seed.sanitized());
    }
}
