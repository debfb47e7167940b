use rosu_strain::{
    any::ObjectFilter,
    model::hit_object::{HitObject, Pos},
    osu::{
        difficulty::{
            evaluators::AimEvaluator, movement::DistanceScaling,
            object::create_difficulty_objects,
        },
        Osu,
    },
    Beatmap, Difficulty, DifficultyError,
};

use self::common::*;

mod common;

#[test]
fn collinear_events_have_constant_strain() {
    let hit_objects = collinear_circles(4, 100.0, 200.0);
    let diff_objects =
        create_difficulty_objects(&hit_objects, 1.0, 100.0, DistanceScaling::LargestRadius);

    assert_eq!(diff_objects.len(), 3);

    let first = diff_objects[0].movements[0];

    for curr in diff_objects.iter() {
        assert_eq!(curr.movements.len(), 1);
        assert_eq_float(curr.movements[0].distance(), first.distance());
        assert_eq_float(curr.movements[0].time(), first.time());
    }

    let interior: Vec<_> = diff_objects[1..]
        .iter()
        .map(|curr| {
            (0..curr.movements.len())
                .map(|idx| AimEvaluator::evaluate_movement(curr, idx, &diff_objects))
                .sum::<f64>()
        })
        .collect();

    assert!(interior[0] > 0.0);
    assert_eq_float(interior[1], interior[0]);
}

#[test]
fn simultaneous_objects_are_floored() {
    for gap in [1.0, 0.0] {
        let hit_objects = vec![
            HitObject::circle(Pos::new(100.0, 100.0), 1000.0, RADIUS),
            HitObject::circle(Pos::new(300.0, 100.0), 1000.0 + gap, RADIUS),
            HitObject::circle(Pos::new(100.0, 100.0), 1500.0, RADIUS),
        ];

        let diff_objects =
            create_difficulty_objects(&hit_objects, 1.0, 100.0, DistanceScaling::LargestRadius);

        let first = &diff_objects[0];

        assert_eq!(first.delta_time, gap);
        assert_eq!(first.adjusted_delta_time, 25.0);
        assert_eq!(first.movements[0].time(), 25.0);

        let attrs = Difficulty::new()
            .calculate(&Beatmap::<Osu>::new(hit_objects))
            .unwrap();

        assert!(attrs.stars.is_finite());
    }
}

#[test]
fn single_object() {
    let map = Beatmap::<Osu>::new(vec![HitObject::circle(Pos::new(0.0, 0.0), 0.0, RADIUS)]);
    let attrs = Difficulty::new().calculate(&map).unwrap();

    assert_eq!(attrs.n_circles, 1);
    assert_eq!(attrs.max_combo, 1);
    assert_eq!(attrs.aim, 0.0);
    assert_eq!(attrs.flow_aim, 0.0);
    assert_eq!(attrs.speed, 0.0);
}

#[test]
fn deterministic() {
    let map = Beatmap::<Osu>::new(jumps(64, 180.0)).ar(9.0).od(8.0);
    let difficulty = Difficulty::new().mods(8 + 1024); // HDFL

    let first = difficulty.calculate(&map).unwrap();
    let second = difficulty.clone().calculate(&map).unwrap();

    assert_eq!(first, second);
    assert!(first.flashlight > 0.0);
    assert_eq!(difficulty.strains(&map).unwrap(), difficulty.strains(&map).unwrap());
}

#[test]
fn double_time_is_harder() {
    let map = Beatmap::<Osu>::new(jumps(64, 250.0));

    let nomod = Difficulty::new().calculate(&map).unwrap();
    let dt = Difficulty::new().mods(64).calculate(&map).unwrap();

    assert!(dt.aim > nomod.aim);
    assert!(dt.speed > nomod.speed);
    assert!(dt.stars > nomod.stars);
}

#[test]
fn relax_has_no_speed() {
    let map = Beatmap::<Osu>::new(jumps(32, 150.0));
    let attrs = Difficulty::new().mods(128).calculate(&map).unwrap();

    assert_eq!(attrs.speed, 0.0);
    assert!(attrs.aim > 0.0);
}

#[test]
fn sliders_count_towards_aim() {
    let hit_objects: Vec<_> = (0..16)
        .map(|i| {
            let start_time = f64::from(i) * 500.0;

            if i % 2 == 0 {
                linear_slider(Pos::new(64.0, 192.0), start_time, 300.0, 250.0)
            } else {
                HitObject::circle(Pos::new(64.0, 192.0), start_time, RADIUS)
            }
        })
        .collect();

    let attrs = Difficulty::new()
        .calculate(&Beatmap::<Osu>::new(hit_objects))
        .unwrap();

    assert_eq!(attrs.n_sliders, 8);
    assert_eq!(attrs.max_combo, 8 * 3 + 8);
    assert!(attrs.aim >= attrs.aim_no_sliders);
    assert!(attrs.slider_factor <= 1.0);
}

#[test]
fn filters_keep_every_object() {
    let mut hit_objects = jumps(16, 200.0);
    hit_objects.push(HitObject::spinner(Pos::new(256.0, 192.0), 3400.0, RADIUS, 1000.0));
    hit_objects.push(linear_slider(Pos::new(64.0, 192.0), 4600.0, 200.0, 300.0));
    hit_objects.extend(jumps(8, 200.0).into_iter().map(|mut h| {
        h.start_time += 5200.0;

        h
    }));

    let map = Beatmap::<Osu>::new(hit_objects);

    let default = Difficulty::new().calculate(&map).unwrap();
    let scoring = Difficulty::new()
        .filter(ObjectFilter::Scoring)
        .calculate(&map)
        .unwrap();
    let combo = Difficulty::new()
        .filter(ObjectFilter::Combo)
        .calculate(&map)
        .unwrap();

    assert_eq!(scoring, default);
    assert_eq!(combo, default);
    assert_eq!(default.n_spinners, 1);
    assert_eq!(default.max_combo, 16 + 1 + 3 + 8);
}

#[test]
fn partial_play() {
    let map = Beatmap::<Osu>::new(jumps(64, 200.0));

    let full = Difficulty::new().calculate(&map).unwrap();
    let partial = Difficulty::new().passed_objects(32).calculate(&map).unwrap();

    assert_eq!(partial.n_circles, 32);
    assert!(partial.stars <= full.stars);
}

#[test]
fn invalid_input() {
    let unsorted = Beatmap::<Osu>::new(vec![
        HitObject::circle(Pos::new(0.0, 0.0), 100.0, RADIUS),
        HitObject::circle(Pos::new(0.0, 0.0), 50.0, RADIUS),
    ]);

    assert!(matches!(
        Difficulty::new().calculate(&unsorted),
        Err(DifficultyError::UnsortedObjects { idx: 1, .. })
    ));

    let map = Beatmap::<Osu>::new(jumps(4, 100.0));

    assert_eq!(
        Difficulty::new().clock_rate(0.0).calculate(&map),
        Err(DifficultyError::InvalidClockRate(0.0))
    );
}
