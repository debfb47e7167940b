use rosu_strain::{
    any::ObjectFilter,
    taiko::{HitType, Taiko, TaikoObject},
    Beatmap, Difficulty,
};

use self::common::*;

mod common;

#[test]
fn mono_streams_raise_mono_factor() {
    let mono = Beatmap::<Taiko>::new(taiko_pattern(&"d".repeat(256), 80.0));
    let alternating = Beatmap::<Taiko>::new(taiko_pattern(&"dk".repeat(128), 80.0));

    let mono = Difficulty::new().calculate(&mono).unwrap();
    let alternating = Difficulty::new().calculate(&alternating).unwrap();

    assert!(mono.mono_stamina_factor > alternating.mono_stamina_factor);
    assert!(alternating.mono_stamina_factor < 0.1, "{}", alternating.mono_stamina_factor);
}

#[test]
fn converts_are_nerfed() {
    let hit_objects = taiko_pattern(&"ddkd".repeat(64), 100.0);

    let regular = Beatmap::<Taiko>::new(hit_objects.clone());
    let convert = Beatmap::<Taiko>::new(hit_objects).is_convert(true);

    let regular = Difficulty::new().calculate(&regular).unwrap();
    let convert = Difficulty::new().calculate(&convert).unwrap();

    assert!(convert.is_convert());
    assert!(convert.stamina < regular.stamina);
    assert!(convert.stars < regular.stars);
}

#[test]
fn max_combo_skips_non_hits() {
    let map = Beatmap::<Taiko>::new(taiko_pattern("dd__kk__dk", 150.0));
    let attrs = Difficulty::new().calculate(&map).unwrap();

    assert_eq!(attrs.max_combo(), 6);
}

#[test]
fn combo_filter_drops_non_hits() {
    let hit_objects = taiko_pattern(&"dd__kk__".repeat(32), 100.0);

    let hits_only: Vec<_> = hit_objects.iter().copied().filter(TaikoObject::is_hit).collect();

    let combo = Difficulty::new()
        .filter(ObjectFilter::Combo)
        .calculate(&Beatmap::<Taiko>::new(hit_objects))
        .unwrap();

    let expected = Difficulty::new()
        .calculate(&Beatmap::<Taiko>::new(hits_only))
        .unwrap();

    assert_eq!(combo, expected);
    assert_eq!(combo.max_combo(), 128);
}

#[test]
fn scoring_filter_keeps_non_hits() {
    let pattern = format!("{}{}", "dk".repeat(16), "_".repeat(16));
    let map = Beatmap::<Taiko>::new(taiko_pattern(&pattern, 100.0));

    let default = Difficulty::new().strains(&map).unwrap();
    let scoring = Difficulty::new()
        .filter(ObjectFilter::Scoring)
        .strains(&map)
        .unwrap();
    let combo = Difficulty::new()
        .filter(ObjectFilter::Combo)
        .strains(&map)
        .unwrap();

    assert_eq!(scoring, default);

    // Trailing drumrolls still open new strain sections
    assert!(scoring.stamina.len() > combo.stamina.len());
}

#[test]
fn hit_windows() {
    let map = Beatmap::<Taiko>::new(taiko_pattern("dkdk", 200.0)).od(5.0);

    let nomod = Difficulty::new().calculate(&map).unwrap();
    let dt = Difficulty::new().mods(64).calculate(&map).unwrap();

    assert_eq_float(nomod.great_hit_window, 35.0);
    assert_eq_float(nomod.ok_hit_window, 80.0);
    assert_eq_float(dt.great_hit_window, 35.0 / 1.5);
}

#[test]
fn faster_is_harder() {
    let slow = taiko_pattern(&"dkkd".repeat(64), 150.0);
    let fast = taiko_pattern(&"dkkd".repeat(64), 75.0);

    let slow = Difficulty::new().calculate(&Beatmap::<Taiko>::new(slow)).unwrap();
    let fast = Difficulty::new().calculate(&Beatmap::<Taiko>::new(fast)).unwrap();

    assert!(fast.stars > slow.stars);
    assert!(fast.stamina_difficult_strain_count > 0.0);
}

#[test]
fn single_note() {
    let map = Beatmap::<Taiko>::new(vec![TaikoObject::new(0.0, HitType::Rim)]);
    let attrs = Difficulty::new().calculate(&map).unwrap();

    assert_eq!(attrs.max_combo, 1);
    assert_eq!(attrs.stars, 0.0);
}
