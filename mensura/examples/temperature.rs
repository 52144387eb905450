//! Absolute vs relative temperatures: points on a scale carry offsets,
//! differences do not.

use mensura::{Abs, Celsius, CelsiusDegrees, Fahrenheit, Kelvin};

fn main() {
    // A point: 20 °C is 293.15 K.
    let room: Abs<Celsius> = Abs::new(20.0);
    println!("{room} = {}", room.to::<Kelvin>());

    // A difference: warming by 5 °C is warming by 5 K.
    let warming = CelsiusDegrees::new(5.0);
    println!("warming of {warming} = {}", warming.to::<Kelvin>());

    // point + difference = point, across scales.
    let warmed = room + warming;
    println!("{room} + {warming} = {}", warmed.to::<Fahrenheit>());

    // point - point = difference.
    let delta: CelsiusDegrees = warmed - room;
    assert!((delta.value() - 5.0).abs() < 1e-12);
}
