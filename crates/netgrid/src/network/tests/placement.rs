use super::*;
use crate::error::EditError;
use crate::grid;

#[test]
fn place_copies_template() {
    let mut net = Network::new();
    let id = place(&mut net, "Server", 5, 5);

    let device = get(&net, &id);
    assert_eq!(device.name, "Server");
    assert_eq!(device.points, 15);
    assert_eq!(device.icon, "./server.png");
    assert_eq!(device.position, pt(5, 5));
    assert!(device.connected_to.is_empty());
}

#[test]
fn place_assigns_unique_ids() {
    let mut net = Network::new();
    let a = place(&mut net, "Server", 1, 1);
    let b = place(&mut net, "Server", 1, 2);
    assert_ne!(a, b);
}

#[test]
fn place_on_occupied_point_is_rejected() {
    let mut net = Network::new();
    let first = place(&mut net, "Server", 5, 5);

    let err = net.place(&template("Database"), pt(5, 5)).unwrap_err();

    assert_eq!(
        err,
        EditError::Occupied {
            point: pt(5, 5),
            occupant: first.clone(),
        }
    );
    assert_eq!(net.len(), 1);
    assert_eq!(net.device_at(pt(5, 5)).unwrap().id, first);
}

#[test]
fn devices_keep_placement_order() {
    let mut net = Network::new();
    place(&mut net, "Firewall", 9, 9);
    place(&mut net, "Database", 0, 0);
    let names: Vec<&str> = net.devices().iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Firewall", "Database"]);
}

#[test]
fn positions_stay_on_grid() {
    let mut net = Network::new();
    place(&mut net, "Server", 0, 0);
    place(&mut net, "Server", 50, 50);
    place(&mut net, "Server", 0, 50);
    for d in net.devices() {
        assert!(d.position.x() <= grid::GRID_MAX);
        assert!(d.position.y() <= grid::GRID_MAX);
    }
}

#[test]
fn place_random_picks_free_point() {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    let mut net = Network::new();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        net.place_random(&template("Server"), &mut rng).unwrap();
    }
    let mut seen: Vec<GridPoint> = net.devices().iter().map(|d| d.position).collect();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 50);
}

#[test]
fn place_random_on_full_grid_fails() {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    let mut net = Network::new();
    for &p in grid::points() {
        net.place(&template("Server"), p).unwrap();
    }
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(
        net.place_random(&template("Server"), &mut rng).unwrap_err(),
        EditError::GridFull
    );
}

#[test]
fn free_points_excludes_occupied() {
    let mut net = Network::new();
    place(&mut net, "Server", 0, 0);
    let free: Vec<GridPoint> = net.free_points().collect();
    assert_eq!(free.len(), grid::GRID_POINTS - 1);
    assert_eq!(free[0], pt(0, 1));
}
