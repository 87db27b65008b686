//! Walk through construction paths and the named orderings.
//!
//! Run: `cargo run -p planar --example orderings`

use std::f64::consts::PI;

use planar::api::OrderKind;
use planar::prelude::*;

fn main() {
    let a = Point::from_xy(3.0, 4.0);
    let b = Point::from_polar(5.0, 0.0);
    let c = Point::from_polar(-2.0, PI / 3.0);

    println!("a = {a}  r={} theta={}", a.r(), a.theta());
    println!("b = {b}  r={} theta={}", b.r(), b.theta());
    println!("c = {c}  r={} theta={}", c.r(), c.theta());

    // Provenance decides how negation happens.
    println!("-a = {}  (componentwise)", -a);
    println!("-b = {}  theta={}  (reflected)", -b, (-b).theta());

    // Same ray: radii add exactly.
    let ray = Point::from_polar(2.0, 1.0) + Point::from_polar(3.0, 1.0);
    println!("colinear sum r = {}", ray.r());

    println!("a and b tie under natural order: {:?}", a.compare_to(&b));

    let mut pts = vec![a, b, c, ORIGIN, Point::from_xy(-1.0, 2.0)];
    for kind in OrderKind::ALL {
        kind.sort(&mut pts);
        let line: Vec<String> = pts
            .iter()
            .map(|p| format!("({:.3}, {:.3})", p.x(), p.y()))
            .collect();
        println!("{:>9}: {}", kind.name(), line.join(" "));
    }
}
