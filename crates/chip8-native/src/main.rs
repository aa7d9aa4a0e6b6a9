#![warn(clippy::all, rust_2018_idioms)]

use anyhow::bail;
use chip8_host::{ClickTarget, Dispatcher, HostConfig, HostView, RuntimeTarget};
use chip8_link::Handshake;
use chip8_link::catalog;
use futures::executor::block_on;
use loopback::{ConsoleView, DirFetcher, Engine, LocalFile, LoopbackRuntime};
use script::{Step, parse_step};
use std::rc::Rc;

mod loopback;
mod script;

const USAGE: &str = "Usage: chip8-native <catalog-key | rom-path> [reset|shift|jump|storeload|mode|click|rate=<n>]...";

fn run_step<R: RuntimeTarget, V: HostView>(dispatcher: &Dispatcher<R, V>, step: Step) {
    match step {
        Step::Reset => dispatcher.reset(),
        Step::LegacyShift => {
            dispatcher.toggle_legacy_shift();
        }
        Step::LegacyJump => {
            dispatcher.toggle_legacy_jump();
        }
        Step::LegacyStoreLoad => {
            dispatcher.toggle_legacy_store_load();
        }
        Step::SwitchMode => {
            dispatcher.switch_mode();
        }
        Step::CycleRate(raw) => dispatcher.set_cycle_rate(&raw),
        Step::Click => dispatcher.handle_click(ClickTarget::PageBackground),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let Some(rom) = args.next() else {
        bail!(USAGE);
    };
    let steps = args
        .map(|arg| parse_step(&arg))
        .collect::<anyhow::Result<Vec<_>>>()?;

    // Catalog keys are served from <root>/roms/<key>
    let root = std::env::var("CHIP8_SITE_ROOT").unwrap_or_else(|_| ".".into());

    let (host_tx, engine_rx) = crossbeam_channel::unbounded();
    let (engine_tx, host_rx) = crossbeam_channel::unbounded();

    let engine = Engine::boot(engine_rx, engine_tx);
    let handshake = Rc::new(Handshake::new());
    let dispatcher = Dispatcher::new(
        handshake.clone(),
        LoopbackRuntime::new(engine.clone(), host_tx),
        ConsoleView,
        HostConfig::default(),
    );

    while let Ok(message) = host_rx.try_recv() {
        dispatcher.handle_runtime_message(message);
    }

    if catalog::lookup(&rom).is_some() {
        block_on(dispatcher.load_catalog_rom(&rom, &DirFetcher::new(&root)));
    } else {
        let file = LocalFile(rom.into());
        log::debug!("Reading {}", file.path().display());
        block_on(dispatcher.load_local_file(Some(file)));
    }
    engine.process_messages();

    for step in steps {
        run_step(&dispatcher, step);
        engine.process_messages();
    }

    println!("handshake: {:?}", handshake.state());
    engine.with_state(|state| {
        println!(
            "rom: {}",
            state
                .rom
                .as_ref()
                .map_or("none".to_string(), |rom| format!("{} bytes", rom.len()))
        );
        println!("running: {}", state.running);
        println!("paused: {}", state.paused);
        println!("legacy shift: {}", state.legacy_shift);
        println!("legacy jump: {}", state.legacy_jump);
        println!("legacy store/load: {}", state.legacy_store_load);
        println!("cycles per second: {}", state.cycles_per_second);
        println!("focus requests: {}", state.focus_requests);
    });

    Ok(())
}
