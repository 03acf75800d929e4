//! Post Preview Script
//!
//! Prints the exact status the bot would post for each hashtag given as an
//! argument (or one per line on stdin), without touching the network.

use std::io::{self, BufRead};

use hashofhashtag::poster::format_post;
use hashofhashtag::twitter::validate_status;
use hashofhashtag::Hashtag;

fn preview(raw: &str) {
    let raw = raw.trim();
    if raw.is_empty() {
        return;
    }
    if !Hashtag::is_hashtag(Some(raw)) {
        println!(
            "⚠️  '{}' has no # marker and would never be picked from trends",
            raw
        );
    }

    let hashtag = Hashtag::new(raw);
    let text = format_post(&hashtag, &hashtag.hashed());

    println!("📝 {}", text);
    match validate_status(&text) {
        Ok(()) => println!("📏 {} characters", text.chars().count()),
        Err(e) => println!("❌ {}", e),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        args.iter().for_each(|raw| preview(raw));
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        preview(&line?);
    }
    Ok(())
}
