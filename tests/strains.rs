use rosu_strain::{
    catch::Catch,
    osu::Osu,
    taiko::Taiko,
    Beatmap, Difficulty, StrainPeak,
};

use self::common::*;

mod common;

fn assert_sections(peaks: &[StrainPeak], section_length: f64) {
    assert!(!peaks.is_empty());

    for pair in peaks.windows(2) {
        assert_eq_float(pair[1].time - pair[0].time, section_length);
    }

    assert!(peaks.iter().all(|peak| peak.value >= 0.0));
    assert!(peaks.iter().all(|peak| peak.section_length == section_length));
}

#[test]
fn osu_fixed_sections() {
    let map = Beatmap::<Osu>::new(jumps(32, 300.0));
    let strains = Difficulty::new().strains(&map).unwrap();

    assert_sections(&strains.aim, 400.0);
    assert_sections(&strains.speed, 400.0);
    assert!(strains.flashlight.is_empty());
}

#[test]
fn osu_variable_sections() {
    // A pause longer than the maximum section length in the middle
    let mut hit_objects = jumps(16, 200.0);
    hit_objects.extend(jumps(16, 200.0).into_iter().map(|mut h| {
        h.start_time += 5000.0;

        h
    }));

    let map = Beatmap::<Osu>::new(hit_objects);
    let strains = Difficulty::new().strains(&map).unwrap();

    assert!(strains.flow_aim.iter().all(|peak| peak.section_length <= 400.0));
    assert!(strains
        .flow_aim
        .windows(2)
        .all(|pair| pair[0].time < pair[1].time));
}

#[test]
fn clock_rate_shortens_map() {
    let map = Beatmap::<Osu>::new(jumps(32, 300.0));

    let nomod = Difficulty::new().strains(&map).unwrap();
    let dt = Difficulty::new().mods(64).strains(&map).unwrap();

    assert!(dt.aim.len() < nomod.aim.len());
}

#[test]
fn taiko_sections() {
    let map = Beatmap::<Taiko>::new(taiko_pattern(&"dkdd".repeat(32), 120.0));
    let strains = Difficulty::new().strains(&map).unwrap();

    assert_sections(&strains.stamina, 400.0);
    assert_eq!(strains.stamina.len(), strains.single_color_stamina.len());
}

#[test]
fn catch_sections() {
    let map = Beatmap::<Catch>::new(catch_jumps(32, 300.0));
    let strains = Difficulty::new().strains(&map).unwrap();

    assert_sections(&strains.movement, 750.0);
}
