//! Listen command implementation
//!
//! Reads transcripts line by line from stdin and runs them through the
//! recognition driver, printing recognized commands as they happen. Useful
//! for trying out catalogs without a speech engine attached.

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use tidyvox::{ChannelSource, CommandResolver, DriverConfig, EngineEvent, RecognitionDriver};

/// Run a stdin-fed recognition session until end of input.
pub async fn listen_command(resolver: CommandResolver, config: Option<&Path>) -> Result<()> {
    let config = match config {
        Some(path) => DriverConfig::from_file(path)?,
        None => DriverConfig::default(),
    };

    let (source, feed) = ChannelSource::new();
    let mut driver = RecognitionDriver::new(resolver, Box::new(source), config);
    let events = driver.subscribe();
    driver.start();

    println!("Listening. Type an utterance per line; Ctrl-D to stop.\n");

    let reader_task = tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let line = line.trim().to_string();
            if !line.is_empty() {
                feed.final_transcript(line);
            }
        }
        // feed drops here, which ends the source.
    });

    loop {
        driver.pump();
        for event in events.try_iter() {
            print_event(&event);
        }
        if reader_task.is_finished() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    // Drain anything queued behind the final line.
    driver.pump();
    for event in events.try_iter() {
        print_event(&event);
    }
    driver.stop();

    Ok(())
}

fn print_event(event: &EngineEvent) {
    match event {
        EngineEvent::CommandRecognized { matched, .. } => {
            println!(
                "  -> {} (confidence {:.2})",
                matched.command.id, matched.confidence
            );
            for (name, value) in &matched.params {
                println!("     {} = {}", name, value);
            }
        }
        EngineEvent::CaptureFailed { message } => {
            eprintln!("  capture failed: {}", message);
        }
        EngineEvent::StatusChanged(_) => {}
    }
}
