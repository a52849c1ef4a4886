//! Generates object identifier contents.
//!
//! Provide a sequence of object identifiers in ‘dot integer’ notation and
//! you will receive the octet array of their DER contents, ready to be
//! pasted into code.
//!
//! An argument of the form `-d<hex>` works the other way around: the hex
//! digits are taken as contents octets and the object identifier is
//! printed in dotted form.

use std::env;
use derid::Oid;

fn parse_hex(s: &str) -> Result<Vec<u8>, &'static str> {
    if s.len() % 2 != 0 {
        return Err("odd number of hex digits")
    }
    (0..s.len()).step_by(2).map(|i| {
        s.get(i..i + 2).and_then(|item| u8::from_str_radix(item, 16).ok())
            .ok_or("only hex digits allowed")
    }).collect()
}

fn process_one(arg: &str) -> Result<(), String> {
    if let Some(hex) = arg.strip_prefix("-d") {
        let octets = parse_hex(hex)?;
        let oid = Oid::from_der(&octets).map_err(|err| err.to_string())?;
        println!("{}", oid);
        return Ok(())
    }

    let oid: Oid = arg.parse().map_err(|err: derid::ParseError| {
        err.to_string()
    })?;
    let octets = oid.to_der();
    let items: Vec<_> = octets.iter().map(u8::to_string).collect();
    println!("[{}]", items.join(", "));
    Ok(())
}

fn main() {
    for arg in env::args().skip(1) {
        if let Err(err) = process_one(arg.as_ref()) {
            println!("{}: {}.", arg, err)
        }
    }
}
