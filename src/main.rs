use scratch_collections::collections::contiguous::Vector;
use scratch_collections::collections::hash::LetterMap;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("\n[Vector]\n");

    let mut strings: Vector<String> = Vector::new();
    println!("{strings:?}");

    strings.push("Hello".into());
    strings.push("World".into());
    println!("{strings:?}");

    println!("Popped {:?}", strings.pop());
    println!("{strings}");

    let mut numbers = Vector::new();
    for i in 0..8 {
        numbers.push(i);
        println!("{numbers:?}");
    }

    numbers.insert(2, 100);
    println!("{numbers}");
    println!("Removed {}, {numbers}", numbers.remove(3));

    println!("\n[LetterMap]\n");

    let mut map = LetterMap::new();
    for key in ["cat", "bat", "dog", "", "k9"] {
        match map.insert(key, key.len()) {
            Ok(_) => println!("Inserted {key:?}"),
            Err(error) => println!("Couldn't insert {key:?}: {error}"),
        }
    }

    for key in ["bat", "rat", "Cat"] {
        match map.get(key) {
            Ok(value) => println!("{key:?} -> {value}"),
            Err(error) => println!("Couldn't get {key:?}: {error}"),
        }
    }

    if let Ok(value) = map.delete("cat") {
        println!("Deleted \"cat\" ({value})");
    }

    println!("{map}");
    println!("{map:?}");
}
