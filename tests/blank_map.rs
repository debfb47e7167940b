use rosu_strain::{
    catch::{Catch, CatchDifficultyAttributes},
    osu::{Osu, OsuDifficultyAttributes},
    taiko::{Taiko, TaikoDifficultyAttributes},
    Beatmap, Difficulty, GameMods,
};

#[test]
fn osu() {
    let map = Beatmap::<Osu>::new(Vec::new());
    let difficulty = Difficulty::new().mods(8 + 64);

    let attrs = difficulty.calculate(&map).unwrap();

    assert_eq!(
        attrs,
        OsuDifficultyAttributes {
            mods: GameMods::from(8 + 64),
            ..Default::default()
        }
    );

    let strains = difficulty.strains(&map).unwrap();

    assert!(strains.aim.is_empty());
    assert!(strains.flow_aim.is_empty());
    assert!(strains.speed.is_empty());
    assert!(strains.flashlight.is_empty());
}

#[test]
fn taiko() {
    let map = Beatmap::<Taiko>::new(Vec::new());
    let attrs = Difficulty::new().calculate(&map).unwrap();

    assert_eq!(attrs, TaikoDifficultyAttributes::default());
    assert!(Difficulty::new().strains(&map).unwrap().stamina.is_empty());
}

#[test]
fn catch() {
    let map = Beatmap::<Catch>::new(Vec::new());
    let attrs = Difficulty::new().mods(16).calculate(&map).unwrap();

    assert_eq!(
        attrs,
        CatchDifficultyAttributes {
            mods: GameMods::from(16),
            ..Default::default()
        }
    );
    assert!(Difficulty::new().strains(&map).unwrap().movement.is_empty());
}

#[test]
fn no_passed_objects() {
    let map = Beatmap::<Osu>::new(common_circles());
    let attrs = Difficulty::new().passed_objects(0).calculate(&map).unwrap();

    assert_eq!(attrs.n_objects(), 0);
    assert_eq!(attrs.stars, 0.0);
}

fn common_circles() -> Vec<rosu_strain::model::hit_object::HitObject> {
    use rosu_strain::model::hit_object::{HitObject, Pos};

    (0..4)
        .map(|i| HitObject::circle(Pos::new(100.0, 100.0), f64::from(i) * 100.0, 32.0))
        .collect()
}
