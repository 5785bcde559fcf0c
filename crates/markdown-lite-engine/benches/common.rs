// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\nSection\n-------\n\nParagraph with **bold** and _soft_ content.\n\n> Quoted line\n>> Nested *quote*\n> Back out\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_quote_heavy(depth: usize, lines: usize) -> String {
    let mut content = String::new();

    for i in 0..lines {
        let level = (i % depth) + 1;
        content.push_str(&">".repeat(level));
        content.push_str(&format!(" line {i} with *emphasis* and __strong__ text\n"));
    }

    content
}
