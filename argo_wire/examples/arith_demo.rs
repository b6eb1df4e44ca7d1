//! Evaluate a small arithmetic chain on MAC'd wires: the "evaluator" adds
//! and scales wires without any key, the "garbler" verifies the result.

use num_bigint::BigUint;

use argo_wire::ArgoWire;
use ec_core::{derive_h_point, CurveParams};

fn main() {
    let curve = CurveParams::from_env().expect("curve parameters");
    let h = derive_h_point(b"arith-demo-h-generator", &curve).expect("secondary generator");

    // Garbler side: two secret keys, two tagged inputs.
    let (k1, k2) = (BigUint::from(123_456u32), BigUint::from(654_321u32));
    let a = ArgoWire::new(&BigUint::from(42u32), &k1, &h, &curve).expect("wire a");
    let b = ArgoWire::new(&BigUint::from(100u32), &k2, &h, &curve).expect("wire b");

    // Evaluator side: pure tag algebra, no keys involved.
    let sum = a.add(&b, &curve).expect("add gate");
    let scaled = sum.mul_const(&BigUint::from(3u32), &curve).expect("mul gate");

    println!("a + b        = {}", sum.value);
    println!("3 * (a + b)  = {}", scaled.value);
    println!("sum tag      = {}", sum.mac.tag);

    // Garbler side again: the keys follow the same algebra.
    let sum_key = (&k1 + &k2) % &curve.n;
    let scaled_key = (&sum_key * 3u32) % &curve.n;

    println!(
        "verify(sum)     -> {}",
        sum.verify(&sum_key, &curve).expect("verify")
    );
    println!(
        "verify(scaled)  -> {}",
        scaled.verify(&scaled_key, &curve).expect("verify")
    );
    println!(
        "verify(bad key) -> {}",
        scaled.verify(&(scaled_key + 1u32), &curve).expect("verify")
    );
}
