use super::*;
use crate::grid::Geometry;

#[test]
fn drag_release_on_device_connects() {
    let mut net = Network::new();
    let a = place(&mut net, "Firewall", 2, 2);
    let b = place(&mut net, "Server", 2, 5);

    let mut drag = net.begin_connection(pt(2, 2));
    drag.pointer_moved(100.0, 180.0);
    assert_eq!(drag.preview(), Some(((100.0, 100.0), (100.0, 180.0))));
    let outcome = drag.finish(103.0, 248.0);

    assert_eq!(outcome, Some(ConnectOutcome::Linked));
    assert!(get(&net, &a).is_connected_to(&b));
}

#[test]
fn drag_release_off_grid_does_nothing() {
    let mut net = Network::new();
    let a = place(&mut net, "Firewall", 2, 2);
    place(&mut net, "Server", 2, 5);

    let outcome = net.begin_connection(pt(2, 2)).finish(125.0, 125.0);

    assert_eq!(outcome, None);
    assert!(get(&net, &a).connected_to.is_empty());
}

#[test]
fn drag_from_empty_point_is_ignored() {
    let mut net = Network::new();
    place(&mut net, "Server", 2, 5);

    let outcome = net.begin_connection(pt(0, 0)).finish(100.0, 250.0);

    assert_eq!(outcome, Some(ConnectOutcome::Ignored));
}

#[test]
fn cancelled_drag_leaves_network_untouched() {
    let mut net = Network::new();
    place(&mut net, "Firewall", 2, 2);
    place(&mut net, "Server", 2, 3);
    {
        let mut drag = net.begin_connection(pt(2, 2));
        drag.pointer_moved(100.0, 150.0);
        assert_eq!(drag.start(), pt(2, 2));
    }
    assert!(net.devices().iter().all(|d| d.connected_to.is_empty()));

    // A new gesture can start once the previous one is gone.
    let outcome = net.begin_connection(pt(2, 2)).finish(100.0, 150.0);
    assert!(outcome.unwrap().accepted());
}

#[test]
fn drag_uses_network_geometry() {
    let geometry = Geometry {
        cell_size: 20.0,
        snap_threshold: 5.0,
    };
    let mut net = Network::new().with_geometry(geometry);
    place(&mut net, "Firewall", 1, 1);
    place(&mut net, "Server", 1, 3);

    let outcome = net.begin_connection(pt(1, 1)).finish(21.0, 59.0);

    assert_eq!(outcome, Some(ConnectOutcome::Linked));
}

#[test]
fn finished_drag_releases_the_network() {
    let mut net = Network::new();
    let a = place(&mut net, "Firewall", 2, 2);
    let b = place(&mut net, "Server", 2, 3);

    let first = net.begin_connection(pt(2, 2)).finish(100.0, 150.0);
    let second = net.begin_connection(pt(2, 3)).finish(100.0, 100.0);

    assert_eq!(first, Some(ConnectOutcome::Linked));
    assert_eq!(second, Some(ConnectOutcome::AlreadyLinked));
    assert!(get(&net, &a).is_connected_to(&b));
    assert_eq!(get(&net, &b).connected_to.len(), 1);
}
