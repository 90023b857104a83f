// SPDX-License-Identifier: MPL-2.0

//! Device inventory example.
//!
//! Lists the physical devices, infrared remotes and scenes on an account,
//! then fetches the status of every physical device.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example list_devices -- <token> [base_url]
//! ```
//!
//! # Examples
//!
//! ```bash
//! # Production endpoint
//! cargo run --example list_devices -- 0123456789abcdef
//!
//! # Local stub
//! cargo run --example list_devices -- fake_token http://127.0.0.1:8080
//! ```

use std::env;
use std::time::Duration;
use switchbot_lib::{ApiConfig, DeviceStatus, RemoteCapabilities, SwitchBot};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    let mut config = ApiConfig::new(&args[1]).with_timeout(Duration::from_secs(10));
    if let Some(base_url) = args.get(2) {
        config = config.with_base_url(base_url);
    }
    let client = SwitchBot::with_config(config)?;

    let devices = client.get_device_list().await?;

    println!("Physical devices ({}):", devices.device_list.len());
    for device in &devices.device_list {
        let info = device.info();
        println!(
            "  {:<14} {:<24} {}",
            info.device_id,
            info.device_name,
            device.type_name()
        );
    }

    println!();
    println!("Infrared remotes ({}):", devices.infrared_remote_list.len());
    for remote in &devices.infrared_remote_list {
        let profile = RemoteCapabilities::for_category(remote.remote_type.category())
            .map_or("-", |caps| caps.name());
        println!(
            "  {:<24} {:<24} {} [{profile}]",
            remote.device_id, remote.device_name, remote.remote_type
        );
    }

    println!();
    println!("Status:");
    for device in &devices.device_list {
        let info = device.info();
        match client.get_device_status(&info.device_id).await {
            Ok(status) => println!("  {:<24} {}", info.device_name, describe(&status)),
            Err(e) => println!("  {:<24} error: {e}", info.device_name),
        }
    }

    let scenes = client.get_scene_list().await?;
    println!();
    println!("Scenes ({}):", scenes.len());
    for scene in &scenes {
        println!("  {:<28} {}", scene.scene_id, scene.scene_name);
    }

    Ok(())
}

fn describe(status: &DeviceStatus) -> String {
    if let Some(meter) = status.as_meter() {
        return format!("{:.1}°C, {}%", meter.temperature, meter.humidity);
    }
    if let Some(curtain) = status.as_curtain() {
        return format!("position {}%", curtain.slide_position);
    }
    if let Some(fan) = status.as_smart_fan() {
        return format!("speed {}, shaking: {}", fan.speed, fan.shaking);
    }
    match status.power() {
        Some(power) => format!("power {power}"),
        None => status.type_name().to_string(),
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage:");
    eprintln!("  {program} <token> [base_url]");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {program} 0123456789abcdef");
    eprintln!("  {program} fake_token http://127.0.0.1:8080");
}
