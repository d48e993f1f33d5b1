use super::*;

#[test]
fn scene_names_round_trip_through_cli_identifiers() {
    for name in SceneName::ALL {
        assert_eq!(name.as_str().parse::<SceneName>().unwrap(), name);
    }
}

#[test]
fn unknown_scene_name_is_an_explicit_error() {
    let err = "rand1m".parse::<SceneName>().unwrap_err();
    assert!(matches!(err, RenderError::UnknownScene(ref s) if s == "rand1m"));
    assert!("".parse::<SceneName>().is_err());
    assert!("RGB".parse::<SceneName>().is_err());
}

#[test]
fn fixed_scenes_have_literal_circles() {
    let rgb = load_scene(SceneName::Rgb);
    assert_eq!(rgb.len(), 3);
    assert!(rgb.circles().iter().all(|c| c.radius == 0.3));
    assert_eq!(rgb.circles()[0].color, [1.0, 0.0, 0.0]);
    assert_eq!(rgb.circles()[2].color, [0.0, 0.0, 1.0]);

    let rgby = load_scene(SceneName::Rgby);
    assert_eq!(rgby.len(), 4);
    assert_eq!(rgby.circles()[3].radius, 0.1);
    assert_eq!(rgby.circles()[3].color, [1.0, 1.0, 0.0]);
}

#[test]
fn randomized_scene_is_deterministic() {
    let a = load_scene(SceneName::Rand10k);
    let b = load_scene(SceneName::Rand10k);
    assert_eq!(a.len(), 10_000);
    assert_eq!(a, b);

    let mut rng_a = Rng64::new(SCENE_SEED);
    let mut rng_b = Rng64::new(SCENE_SEED);
    assert_eq!(
        generate_scene(SceneName::Pattern, &mut rng_a),
        generate_scene(SceneName::Pattern, &mut rng_b)
    );
}

#[test]
fn randomized_scene_is_back_to_front_with_bounded_attributes() {
    let scene = load_scene(SceneName::Rand10k);
    let circles = scene.circles();

    for pair in circles.windows(2) {
        assert!(pair[0].z >= pair[1].z, "depths must be non-increasing");
    }
    for c in circles {
        assert!((0.02..=0.08).contains(&c.radius));
        assert!((0.0..=1.0).contains(&c.x));
        assert!((0.0..=1.0).contains(&c.y));
        assert!((0.1..=1.0).contains(&c.color[0]));
        assert!((0.2..=0.7).contains(&c.color[1]));
        assert!((0.5..=1.0).contains(&c.color[2]));
    }
}

#[test]
fn large_random_scene_uses_warm_palette() {
    let scene = load_scene(SceneName::Rand100k);
    assert_eq!(scene.len(), 100_000);
    for c in scene.circles() {
        assert!((0.3..=1.2).contains(&c.color[0]));
        assert!((0.1..=1.0).contains(&c.color[1]));
        assert!((0.1..=0.5).contains(&c.color[2]));
    }
}

#[test]
fn pattern_scene_appends_red_grid_then_yellow_grid() {
    let scene = load_scene(SceneName::Pattern);
    let circles = scene.circles();
    assert_eq!(circles.len(), 16 * 16 + 31 * 31);

    let (red, yellow) = circles.split_at(16 * 16);
    assert!(red.iter().all(|c| c.color == [1.0, 0.0, 0.0]));
    assert!(yellow.iter().all(|c| c.color == [1.0, 1.0, 0.0]));
    assert!(circles.iter().all(|c| c.radius == 1.0 / 32.0));

    assert_eq!((red[0].x, red[0].y), (1.0 / 32.0, 1.0 / 32.0));
    assert_eq!((yellow[0].x, yellow[0].y), (0.0, 0.0));
    assert_eq!(yellow[1].x, 1.0 / 16.0);
    assert_eq!(yellow[31].y, 1.0 / 16.0);
}
