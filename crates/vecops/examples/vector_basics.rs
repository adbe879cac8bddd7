use anyhow::Result;
use vecops::config::OpsConfig;
use vecops::ops::{add, div, dot, inc, norm, ones, sum};
use vecops::Vector;

fn main() -> Result<()> {
    env_logger::init();

    // Violation policy comes from VECOPS_ON_VIOLATION (`error` or `panic`)
    let cfg = OpsConfig::from_env();
    println!("Violation policy: {:?}", cfg.policy);

    let a = inc(5);
    let b = ones(5);
    println!("a = {}", a);
    println!("b = {}", b);

    let c = cfg.enforce(add(&a, &b))?;
    println!("a + b = {}", c);
    println!("sum(a + b) = {}", sum(&c));
    println!("a . b = {}", cfg.enforce(dot(&a, &b))?);
    println!("|a| = {}", norm(&a));

    let scaled = c.apply(|x| x * 10.0);
    println!("10 * (a + b) = {}", scaled);
    println!("(10 * (a + b)) / (a + b) = {}", cfg.enforce(div(&scaled, &c))?);

    // Mismatched lengths: returned as an error, or fatal under the panic policy
    let short = Vector::from_vec(vec![1.0, 2.0]);
    match cfg.enforce(add(&a, &short)) {
        Ok(v) => println!("unexpected result {}", v),
        Err(err) => println!("rejected: {}", err),
    }

    Ok(())
}
