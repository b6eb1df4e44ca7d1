//! Garble one AND gate and evaluate it on every input pair.

use binary_gc::{BinaryWire, GarbledGate, GateType};

fn main() {
    let mut rng = rand::thread_rng();

    let in_a = BinaryWire::random(&mut rng);
    let in_b = BinaryWire::random(&mut rng);
    let out = BinaryWire::random(&mut rng);

    let gate = GarbledGate::garble(GateType::And, in_a, in_b, out).expect("garble AND gate");

    for a in [false, true] {
        for b in [false, true] {
            let label = gate
                .evaluate(&in_a.label(a), &in_b.label(b))
                .expect("evaluate");
            let bit = if label == out.label(true) {
                "1"
            } else if label == out.label(false) {
                "0"
            } else {
                "?"
            };
            println!("{} AND {} -> {}", a as u8, b as u8, bit);
        }
    }
}
