use super::*;

#[test]
fn remove_cascades_links() {
    let mut net = Network::new();
    let hub = place(&mut net, "Database", 5, 5);
    let left = place(&mut net, "Server", 5, 6);
    let right = place(&mut net, "Firewall", 6, 5);
    net.connect(&hub, &left);
    net.connect(&hub, &right);
    net.connect(&left, &right);
    assert_eq!(get(&net, &hub).connected_to.len(), 2);

    assert!(net.remove(pt(5, 5)));

    assert!(net.device(&hub).is_none());
    assert!(!get(&net, &left).is_connected_to(&hub));
    assert!(!get(&net, &right).is_connected_to(&hub));
    assert!(get(&net, &left).is_connected_to(&right));
    assert_consistent(&net);
}

#[test]
fn remove_empty_point_is_noop() {
    let mut net = Network::new();
    place(&mut net, "Server", 1, 1);

    assert!(!net.remove(pt(2, 2)));
    assert_eq!(net.len(), 1);
}

#[test]
fn removed_point_can_be_reused() {
    let mut net = Network::new();
    let old = place(&mut net, "Server", 1, 1);
    net.remove(pt(1, 1));
    let new = place(&mut net, "Database", 1, 1);
    assert_ne!(old, new);
    assert_eq!(net.device_at(pt(1, 1)).unwrap().name, "Database");
}

#[test]
fn remove_does_not_touch_saved_slot() {
    let mut net = Network::new();
    place(&mut net, "Server", 1, 1);
    net.save();
    net.remove(pt(1, 1));
    assert!(net.is_empty());
    assert_eq!(net.saved().len(), 1);
}
