//! Serializing and deserializing quantities.
//!
//! Quantities serialize as `{"value": …, "unit": "…"}` with the value in the standard unit.
//! Deserialization accepts any unit of the family and converts on the way in. Dimensionless groups
//! serialize as bare numbers.
//!
//! To run this example:
//! ```bash
//! cargo run --example serialization --features serde
//! ```

#[cfg(feature = "serde")]
fn main() {
    use phq::{
        HeatFlux, Length, LengthUnit, PrandtlNumber, StaticPressure, Stress, Temperature,
        TemperatureUnit, Vector,
    };
    use serde::{Deserialize, Serialize};

    println!("=== Quantity Serialization Examples ===\n");

    println!("1. Built-in text forms:");
    let t = Temperature::new(20.0, TemperatureUnit::Celsius);
    println!("   print: {}", t.print_in(TemperatureUnit::Celsius));
    println!("   json:  {}", t.json());
    println!("   xml:   {}", t.xml());
    println!("   yaml:  {}", t.yaml());
    println!();

    println!("2. serde_json, any unit of the family on input:");
    let gap: Length = serde_json::from_str(r#"{"value": 12.5, "unit": "mm"}"#).unwrap();
    println!(
        "   {} → {}",
        gap.print_in(LengthUnit::Millimetre),
        serde_json::to_string(&gap).unwrap()
    );
    match serde_json::from_str::<Length>(r#"{"value": 1.0, "unit": "kg"}"#) {
        Ok(_) => unreachable!(),
        Err(err) => println!("   wrong family: {}", err),
    }
    println!();

    println!("3. Structs containing quantities:");
    #[derive(Serialize, Deserialize, Debug)]
    struct WallReading {
        name: String,
        temperature: Temperature,
        heat_flux: HeatFlux,
        stress: Stress,
        prandtl_number: PrandtlNumber,
    }

    let reading = WallReading {
        name: "wall".to_string(),
        temperature: t,
        heat_flux: HeatFlux::from_standard(Vector::new(0.0, -250.0, 0.0)),
        stress: Stress::from_static_pressure(StaticPressure::from_standard(101_325.0)),
        prandtl_number: PrandtlNumber::new(7.0),
    };
    let json = serde_json::to_string_pretty(&reading).unwrap();
    println!("{}", json);

    let restored: WallReading = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.stress, reading.stress);
    println!("   restored: {:?}", restored);
    println!();

    println!("4. from_json reports the position of syntax errors:");
    if let Err(err) = Length::<f64>::from_json("{\"value\":\n  oops}") {
        println!("   {}", err);
    }
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serialization --features serde");
}
