// Example demonstrating ArrayBitStack for walking deeply nested documents

use cursorjson::{ArrayBitStack, BitStackStruct, Cursor, ParseError};

fn main() -> Result<(), ParseError> {
    println!("=== ArrayBitStack Demo ===\n");

    // obj->arr->obj->arr->... to depth 100
    let deep_json = generate_deep_mixed_json(100);
    println!(
        "Generated JSON (first 60 chars): {}",
        &deep_json[..deep_json.len().min(60)]
    );

    println!("\n1. Default configuration (64 levels):");
    match Cursor::new(&deep_json).skip_value() {
        Ok(()) => println!("   walked successfully"),
        Err(e) => println!("   rejected: {}", e),
    }

    println!("\n2. ArrayBitStack<2, u64> (128 levels):");
    let mut max_depth = 0;
    Cursor::new(&deep_json)
        .walk_value_with_config::<BitStackStruct<ArrayBitStack<2, u64>>, _>(|_, depth| {
            max_depth = max_depth.max(depth);
        })?;
    println!("   walked successfully, deepest value at depth {}", max_depth);

    Ok(())
}

fn generate_deep_mixed_json(depth: usize) -> String {
    let mut json = String::new();
    for level in 0..depth {
        if level % 2 == 0 {
            json.push_str("{\"level\": ");
        } else {
            json.push('[');
        }
    }
    json.push_str("null");
    for level in (0..depth).rev() {
        if level % 2 == 0 {
            json.push('}');
        } else {
            json.push(']');
        }
    }
    json
}
