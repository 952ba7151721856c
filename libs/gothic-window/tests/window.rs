use approx::assert_abs_diff_eq;
use gothic_window::material::BlendMode;
use gothic_window::scene::ObjectKind;
use gothic_window::{build_gothic_window, InMemoryScene, MaterialCache, Scene, WindowError, WindowParameters};

fn build(scene: &mut InMemoryScene, materials: &mut MaterialCache, params: WindowParameters) -> gothic_window::WindowAssembly {
    build_gothic_window(scene, materials, &params).unwrap()
}

#[test]
fn reference_window_frame_bounds_and_outputs() {
    let mut scene = InMemoryScene::new();
    let mut materials = MaterialCache::new();
    let window = build(&mut scene, &mut materials, WindowParameters::new(2.0, 3.0, 0.2, 0.15));

    assert_eq!(window.frame.name, "GothicWindowFrame");
    assert_eq!(window.panel.name, "GlassPanel");
    assert_eq!(window.mullions.len(), 6);

    let (min, max) = window.frame.world_bounds();
    assert_abs_diff_eq!(min.x, -1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(max.x, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(min.z, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(max.z, 3.0, epsilon = 1e-9);
    assert_abs_diff_eq!(min.y, -0.1, epsilon = 1e-9);
    assert_abs_diff_eq!(max.y, 0.1, epsilon = 1e-9);
}

#[test]
fn frame_and_panel_meshes_are_valid() {
    let mut scene = InMemoryScene::new();
    let mut materials = MaterialCache::new();
    let window = build(&mut scene, &mut materials, WindowParameters::new(2.0, 3.0, 0.2, 0.15));

    assert!(window.frame.mesh.validate());
    assert!(window.panel.mesh.validate());
}

#[test]
fn panel_uses_glass() {
    let mut scene = InMemoryScene::new();
    let mut materials = MaterialCache::new();
    let window = build(&mut scene, &mut materials, WindowParameters::new(2.0, 3.0, 0.2, 0.15));

    assert_eq!(window.panel.materials.len(), 1);
    let glass = materials.get(window.panel.materials[0]).unwrap();
    assert_eq!(glass.name, "Glass");
    assert_eq!(glass.blend_mode, BlendMode::Blend);
    assert_abs_diff_eq!(glass.bsdf.transmission, 0.92, epsilon = 1e-6);
    assert_abs_diff_eq!(glass.bsdf.ior, 1.45, epsilon = 1e-6);
}

#[test]
fn mullion_snapshots_keep_names_and_stone() {
    let mut scene = InMemoryScene::new();
    let mut materials = MaterialCache::new();
    let window = build(&mut scene, &mut materials, WindowParameters::default());
    let stone = materials.find("Stone").unwrap().id;

    let names: Vec<&str> = window.mullions.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["Vertical_1", "Vertical_2", "Vertical_3", "Tracery_1", "Tracery_2", "Tracery_3"]);
    for mullion in &window.mullions {
        assert_eq!(mullion.materials, vec![stone]);
        assert_eq!(mullion.triangle_count(), 12);
    }
}

#[test]
fn merged_frame_triangle_count_is_sum_of_parts() {
    let mut scene = InMemoryScene::new();
    let mut materials = MaterialCache::new();
    let params = WindowParameters::new(2.0, 3.0, 0.2, 0.15);

    let mut reference = InMemoryScene::new();
    let arch_id = gothic_window::arch::build_arch(&mut reference, &params.frame_arch()).unwrap();
    let arch_triangles = reference.get(arch_id).unwrap().mesh().unwrap().triangle_count();

    let window = build(&mut scene, &mut materials, params);
    assert_eq!(window.frame.triangle_count(), arch_triangles + 6 * 12);
}

#[test]
fn invalid_width_creates_nothing() {
    let mut scene = InMemoryScene::with_startup_objects();
    let mut materials = MaterialCache::new();
    let before = scene.object_ids();

    let err = build_gothic_window(&mut scene, &mut materials, &WindowParameters::new(-1.0, 3.0, 0.2, 0.15)).unwrap_err();
    assert!(matches!(err, WindowError::InvalidParameter { name: "width", .. }));
    assert_eq!(scene.object_ids(), before);
    assert!(materials.is_empty());
}

#[test]
fn oversized_frame_thickness_creates_nothing() {
    let mut scene = InMemoryScene::with_startup_objects();
    let mut materials = MaterialCache::new();
    let err = build_gothic_window(&mut scene, &mut materials, &WindowParameters::new(1.0, 3.0, 0.2, 0.9)).unwrap_err();
    assert!(err.is_invalid_parameter());
    assert_eq!(scene.object_count(), 3);
    assert!(scene.find_by_name("Cube").is_some());
}

#[test]
fn rebuilding_with_clear_keeps_one_set() {
    let mut scene = InMemoryScene::new();
    let mut materials = MaterialCache::new();
    build(&mut scene, &mut materials, WindowParameters::default());
    let second = build(&mut scene, &mut materials, WindowParameters::default());

    assert_eq!(scene.objects_of_kind(ObjectKind::Mesh).len(), 2);
    assert_eq!(second.frame.name, "GothicWindowFrame");
    assert_eq!(second.panel.name, "GlassPanel");
    assert_eq!(materials.len(), 2);
}

#[test]
fn clearing_spares_non_mesh_objects() {
    let mut scene = InMemoryScene::with_startup_objects();
    let mut materials = MaterialCache::new();
    build(&mut scene, &mut materials, WindowParameters::default());

    assert!(scene.find_by_name("Cube").is_none());
    assert!(scene.find_by_name("Camera").is_some());
    assert!(scene.find_by_name("Light").is_some());
    assert_eq!(scene.object_count(), 4);
}

#[test]
fn building_without_clear_disambiguates_names() {
    let mut scene = InMemoryScene::new();
    let mut materials = MaterialCache::new();
    let params = WindowParameters::default().with_clear_existing(false);
    build(&mut scene, &mut materials, params);
    let second = build(&mut scene, &mut materials, params);

    assert_eq!(second.frame.name, "GothicWindowFrame.001");
    assert_eq!(second.panel.name, "GlassPanel.001");
    assert_eq!(scene.objects_of_kind(ObjectKind::Mesh).len(), 4);
    assert_eq!(materials.len(), 2);
}

#[test]
fn materials_are_shared_across_builds() {
    let mut scene = InMemoryScene::new();
    let mut materials = MaterialCache::new();
    let first = build(&mut scene, &mut materials, WindowParameters::default());
    let second = build(&mut scene, &mut materials, WindowParameters::default());
    assert_eq!(first.frame.materials, second.frame.materials);
    assert_eq!(first.panel.materials, second.panel.materials);
}
