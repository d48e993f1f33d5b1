use super::*;

#[test]
fn particle_dump_lists_count_then_circles() {
    let scene = Scene::from_circles(vec![
        Circle::new(0.25, 0.5, 0.75, 0.1, [1.0, 0.0, 0.0]),
        Circle::new(0.5, 0.5, 0.5, 0.2, [0.0, 1.0, 0.0]),
    ]);

    let mut out = Vec::new();
    scene.write_particles(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "2");
    assert_eq!(lines[1], "0.250000 0.500000 0.750000     0.100000");
    assert_eq!(lines[2], "0.500000 0.500000 0.500000     0.200000");
}

#[test]
fn empty_scene_reports_empty() {
    let scene = Scene::default();
    assert!(scene.is_empty());
    assert_eq!(scene.len(), 0);
    assert!(scene.circles().is_empty());
}
