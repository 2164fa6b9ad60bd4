//! Console-driven walkthrough of the engine API.
//!
//! Plain lines arrive as Message events, `/`-prefixed lines as Command
//! events; `/quit` stops the loop. Type `/help` once it is running.

use anyhow::{Result, ensure};

use voxen_engine::api;
use voxen_engine::event::{Event, EventKind, ProviderHandle};
use voxen_engine::logging::{LoggingConfig, init_logging};
use voxen_engine::scene::{ObjectId, SceneHandle};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let scene = api::create_scene(8, 8, 4)?;
    api::create_object(&scene, 0, 0, 0, 1)?;
    api::create_object(&scene, 3, 3, 0, 2)?;
    log::info!(
        "scene {} ready with {} object(s)",
        scene.borrow().dimensions(),
        scene.borrow().object_count()
    );

    let window = api::create_window(640, 480);
    let screen = api::create_screen();
    api::set_view_size(&screen, 2.0)?;

    let mut event_loop = api::create_event_loop(scene.clone(), window, screen);

    let command_scene = scene.clone();
    api::add_event_listener(
        &mut event_loop,
        EventKind::Command,
        move |event: &Event, provider: &ProviderHandle| {
            let Event::Command { command } = event else {
                return;
            };
            let args: Vec<&str> = command.split_whitespace().collect();
            match args.split_first() {
                Some((&"help", _)) => {
                    println!("commands: /spawn x y z kind, /resize x y z, /load file, /quit");
                }
                Some((&"quit", _)) => provider.throw_event(Event::Exit),
                Some((&"spawn", rest)) => match spawn_object(&command_scene, rest) {
                    Ok(id) => println!("spawned object {id}"),
                    Err(err) => println!("spawn failed: {err}"),
                },
                Some((&"resize", rest)) => match resize_scene(&command_scene, rest) {
                    Ok(()) => println!("scene is now {}", command_scene.borrow().dimensions()),
                    Err(err) => println!("resize failed: {err}"),
                },
                // A command can fan out into a file-input chain; the loop
                // delivers the synthesized event next cycle.
                Some((&"load", [file])) => provider.throw_event(Event::FileInput {
                    file_name: (*file).to_string(),
                }),
                _ => println!("unknown command: /{command}"),
            }
        },
    );

    api::add_event_listener(
        &mut event_loop,
        EventKind::FileInput,
        |event: &Event, _: &ProviderHandle| {
            if let Event::FileInput { file_name } = event {
                println!("file input: {file_name}");
            }
        },
    );

    api::add_event_listener(
        &mut event_loop,
        EventKind::Message,
        |event: &Event, _: &ProviderHandle| {
            if let Event::Message { data } = event {
                println!("message: {}", String::from_utf8_lossy(data));
            }
        },
    );

    api::add_console_input_provider(&mut event_loop)?;

    println!("voxen demo — /help for commands, /quit to exit");
    api::start_event_loop(&mut event_loop);
    println!("bye");
    Ok(())
}

fn spawn_object(scene: &SceneHandle, args: &[&str]) -> Result<ObjectId> {
    ensure!(args.len() == 4, "usage: /spawn x y z kind");
    let id = api::create_object(
        scene,
        args[0].parse()?,
        args[1].parse()?,
        args[2].parse()?,
        args[3].parse()?,
    )?;
    Ok(id)
}

fn resize_scene(scene: &SceneHandle, args: &[&str]) -> Result<()> {
    ensure!(args.len() == 3, "usage: /resize x y z");
    api::scene_smart_resize(scene, args[0].parse()?, args[1].parse()?, args[2].parse()?)?;
    Ok(())
}
