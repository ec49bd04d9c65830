// Example: drive a controller over a simulated page, the way a browser adapter would.
use emergence::{DEFAULT_MARKER, EmergenceOptions, Transition};
use emergence_adapter::{Controller, NodeId, SimDocument};

fn main() {
    let mut doc = SimDocument::new(1280.0, 800.0);
    let sections: Vec<NodeId> = (0..6)
        .map(|i| doc.append_tracked(DEFAULT_MARKER, 500.0 * i as f64, 0.0, 1280.0, 300.0))
        .collect();

    let opts = EmergenceOptions::new()
        .with_throttle_ms(100)
        .with_callback(Some(|node: &NodeId, t: Transition| {
            if t != Transition::Reset {
                println!("  node {} -> {t}", node.index());
            }
        }));
    let mut c = Controller::new(opts, doc);
    println!("init: {:?}", c.init());

    // A 60fps frame loop with a scroll event every frame for two seconds.
    let mut now = 0u64;
    let mut y = 0.0;
    while now < 2_000 {
        now += 16;
        y += 24.0;
        c.scroll_window_to(0.0, y, now);
        if let Some(report) = c.tick(now) {
            println!(
                "t={now}ms y={y}: tracked={} visible={}",
                report.tracked, report.visible
            );
        }
    }

    let visible: Vec<usize> = sections
        .iter()
        .filter(|n| c.document().attribute(**n, DEFAULT_MARKER) == Some("visible"))
        .map(|n| n.index())
        .collect();
    println!("visible at the end: {visible:?}");
}
