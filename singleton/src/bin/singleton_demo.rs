//! Console walk-through of each singleton variant.
//!
//! Construction diagnostics go through the logger; the comparisons and
//! behavior output go to stdout.

use singleton::core::{same_instance, Singleton};
use singleton::{Guarded, Holder, Registered, Stamped};

fn main() {
    // Fixed level: the demo reads no environment variables.
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .init();

    println!("=== Holder ===");
    let h1 = Holder::instance();
    let h2 = Holder::instance();
    println!("Are both instances the same? {}", same_instance(h1, h2));
    println!("{}", h1.do_something());
    println!("{}", h2.show_message());

    println!("\n=== Guarded ===");
    let g1 = Guarded::instance();
    let g2 = Guarded::instance();
    println!("Are both instances the same? {}", same_instance(g1, g2));
    println!("{}", g1.do_something());

    println!("\n=== Stamped ===");
    let s1 = Stamped::instance();
    let s2 = Stamped::instance();
    println!("Are both instances the same? {}", same_instance(s1, s2));
    println!("Created at {}", s1.created_at().to_rfc3339());
    println!("{}", s1.do_something());

    println!("\n=== Registered ===");
    let r1 = Registered::instance();
    let r2 = Registered::instance();
    println!("Are both instances the same? {}", same_instance(r1, r2));
    println!("{}", r1.do_something());
}
