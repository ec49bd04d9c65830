// Example: the overlap test and permissive option parsing, without a document.
use emergence::{
    Bounds, EmergenceOptions, Offsets, Point, RawOptions, RawValue, Size, is_handheld_user_agent,
    overlaps,
};

fn main() {
    let window = Size::new(1280.0, 800.0);
    let card = Bounds::new(1000.0, 0.0, 100.0, 100.0);

    for y in [0.0, 150.0, 300.0] {
        let scroll = Point::new(0.0, y);
        let plain = overlaps(card, scroll, window, 0.0, Offsets::default());
        let cushioned = overlaps(card, scroll, window, 0.15, Offsets::default());
        println!("scroll_y={y}: visible={plain} visible_with_cushion={cushioned}");
    }

    let raw = RawOptions {
        throttle: Some(RawValue::from("100ms")),
        elem_cushion: Some(RawValue::from("not a number")),
        offset_bottom: Some(RawValue::from(-120i64)),
        ..RawOptions::default()
    };
    let opts = EmergenceOptions::<u32>::from_raw(&raw);
    println!("parsed options: {opts:?}");

    let ua = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)";
    println!("handheld={}", is_handheld_user_agent(ua));
}
