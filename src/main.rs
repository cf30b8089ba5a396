//! Tetraptych - Entry Point
//!
//! Interactive front-end for the four-quadrant poster. It renders the
//! quadrants as text, regenerates their images on demand, and can write a
//! generated image to disk. Rendering beyond plain text is a host concern.

use tetraptych::core::error::Result;
use tetraptych::core::types::SlotId;
use tetraptych::gen::keys::API_KEY_VAR;
use tetraptych::gen::{ImageClient, ImageGenerator, ImageRef};
use tetraptych::poster::Poster;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::io::{self, Write};
use tokio::runtime::Runtime;

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("tetraptych=info")
        .init();

    tracing::info!("Tetraptych starting...");

    // Async runtime for the generation calls
    let rt = Runtime::new()?;

    let client = ImageClient::from_env();
    if !client.key_selected() {
        // Advisory only: the poster still works, showing fallback images
        println!();
        println!(
            "No image API key selected (set {}). Quadrants will show fallback images",
            API_KEY_VAR
        );
        println!("until a key is available; it is re-read on every refresh.");
    }

    let mut poster = Poster::new(client);

    println!("\n=== TETRAPTYCH ===");
    println!("Genesis and Modern, good and evil, in four quadrants");
    println!();
    println!("Commands:");
    println!("  show / s               - Show the four quadrants");
    println!("  refresh <slot> / r     - Regenerate one quadrant (gen-good, gen-evil, mod-good, mod-evil)");
    println!("  all / a                - Regenerate all four quadrants");
    println!("  save <slot> <path>     - Write a generated image to disk as PNG");
    println!("  quit / q               - Exit");
    println!();

    display_poster(&poster);

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input == "quit" || input == "q" {
            break;
        }

        if input == "show" || input == "s" {
            display_poster(&poster);
            continue;
        }

        if input == "all" || input == "a" {
            println!("Regenerating all four quadrants...");
            rt.block_on(poster.refresh_all());
            display_poster(&poster);
            continue;
        }

        if let Some(rest) = input.strip_prefix("refresh ").or(input.strip_prefix("r ")) {
            match SlotId::parse(rest.trim()) {
                Some(slot) => {
                    println!("Regenerating {}...", slot);
                    rt.block_on(poster.refresh(slot));
                    display_quadrant(poster.slot(slot));
                }
                None => println!("Unknown slot. Use: gen-good, gen-evil, mod-good, mod-evil"),
            }
            continue;
        }

        if let Some(rest) = input.strip_prefix("save ") {
            let mut parts = rest.split_whitespace();
            match (parts.next().and_then(SlotId::parse), parts.next()) {
                (Some(slot), Some(path)) => {
                    if let Err(e) = save_image(&poster, slot, path) {
                        println!("Save failed: {}", e);
                    }
                }
                _ => println!("Usage: save <slot> <path>"),
            }
            continue;
        }

        println!("Unknown command. Available: show, refresh <slot>, all, save <slot> <path>, quit");
    }

    println!("\nGoodbye.");
    Ok(())
}

/// Display all four quadrants
fn display_poster<G: ImageGenerator>(poster: &Poster<G>) {
    println!();
    for slot in poster.slots() {
        display_quadrant(slot);
    }
}

/// Display one quadrant: active content plus image status
fn display_quadrant(slot: &tetraptych::poster::SlotState) {
    let content = slot.active_content();

    println!("--- [{}] {} ---", slot.id, content.title);
    println!("  {}", content.description);
    if let Some(verse) = content.verse {
        println!("  \"{}\"", verse);
    }

    let image_status = if slot.is_loading {
        "generating...".to_string()
    } else if slot.current_image.is_generated() {
        "generated image".to_string()
    } else {
        format!("fallback: {}", slot.current_image.as_display_uri())
    };
    println!("  Image: {}", image_status);
    println!();
}

/// Write a slot's generated image to disk as a PNG file
fn save_image<G: ImageGenerator>(poster: &Poster<G>, slot: SlotId, path: &str) -> Result<()> {
    match &poster.slot(slot).current_image {
        ImageRef::PngData(b64) => {
            let bytes = BASE64.decode(b64.as_bytes())?;
            std::fs::write(path, bytes)?;
            println!("Saved {} to {}", slot, path);
        }
        ImageRef::Url(url) => {
            println!("{} has no generated image yet (showing fallback {})", slot, url);
        }
    }
    Ok(())
}
