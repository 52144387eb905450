//! Minimal end-to-end example: convert lengths and compute a derived speed.

use mensura::{Kilometers, Meter, Meters, MetersPerSecond, Seconds};

fn main() {
    let d = Kilometers::new(1.25);
    let m = d.to::<Meter>();
    assert!((m.value() - 1250.0).abs() < 1e-12);

    let v: MetersPerSecond = Meters::new(100.0) / Seconds::new(20.0);
    assert!((v.value() - 5.0).abs() < 1e-12);

    println!("{d} = {m}, average speed {v}");
}
