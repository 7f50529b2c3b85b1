// Desktop Runtime - headless scripted session for the house viewer
//
// Drives the teleport locomotion stack without a headset or a window: builds
// a synthetic house surface set, fakes an immersive session with one aimed
// controller, and steps the frame loop at a fixed delta while logging what
// the teleport system does. Useful for exercising the full select/fade/
// relocate cycle from a terminal.

use anyhow::Result;
use cgmath::{vec3, Deg, Quaternion, Rotation3};
use clap::Parser;
use engine::logging;
use engine::scene::{Surface, Transform, TriangleMesh};
use housevr::teleport::{TeleportConfig, TeleportSystem, TeleportUi, TeleportVisualStyle};
use housevr::{ControllerId, HouseModel, InputContext, PlayerRig, Time};
use tracing::info;

const FRAME_DELTA: f32 = 1.0 / 60.0;

#[derive(Parser)]
#[command(name = "desktop_runtime")]
#[command(about = "Headless scripted walkthrough of the teleport locomotion stack")]
struct Args {
    /// Number of frames to simulate
    #[arg(long, default_value = "240")]
    frames: u32,

    /// Frame on which the trigger is pressed
    #[arg(long, default_value = "30")]
    select_frame: u32,

    /// Frame on which the trigger is released (starts the teleport)
    #[arg(long, default_value = "60")]
    release_frame: u32,

    /// Fade phase duration in seconds
    #[arg(long, default_value = "0.25")]
    fade_duration: f32,

    /// Standing eye height used for the fake headset offset, meters
    #[arg(long, default_value = "1.6")]
    eye_height: f32,
}

/// A tiny stand-in for the loaded house: two named floor slabs and a wall.
/// The model collaborator tags floors by name convention.
fn build_house() -> HouseModel {
    let living_room = Surface::new(
        "LivingRoom_Floor",
        TriangleMesh::horizontal_quad(5.0),
        Transform::identity(),
    );
    let hallway = Surface::new(
        "Hallway_Floor",
        TriangleMesh::horizontal_quad(2.0),
        Transform::from_position(vec3(0.0, 0.0, -7.0)),
    );
    let wall = Surface::new(
        "Wall_North",
        TriangleMesh::horizontal_quad(5.0),
        Transform::new(vec3(0.0, 2.0, -9.0), Quaternion::from_angle_x(Deg(90.0))),
    );

    HouseModel::from_surfaces(vec![living_room, hallway, wall])
}

fn main() -> Result<()> {
    // Initialize tracing with info level by default
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "desktop_runtime=info".into()),
        )
        .init();
    logging::init_logging("HOUSEVR_LOG");

    let args = Args::parse();

    let house = build_house();

    let mut rig = PlayerRig::new();
    rig.set_camera_local(vec3(0.0, args.eye_height, 0.0));

    let mut input = InputContext::new();
    input.is_presenting = true;

    let controller = ControllerId(0);
    let mut system = TeleportSystem::new(TeleportConfig {
        fade_duration: args.fade_duration,
        ..TeleportConfig::default()
    });
    system.add_controller(controller);

    let style = TeleportVisualStyle::default();
    let mut time = Time::new();

    info!(
        "session start: {} frames, rig at {:?}, camera at {:?}",
        args.frames,
        rig.position,
        rig.camera_world_position()
    );

    for frame in 0..args.frames {
        time.tick(FRAME_DELTA);

        // The fake controller hovers beside the head, aiming down-forward at
        // the floor a couple of meters ahead.
        let controller_pose = Transform::new(
            rig.position + vec3(0.2, args.eye_height - 0.2, 0.0),
            Quaternion::from_angle_x(Deg(-40.0)),
        );
        input.set_controller_pose(controller, controller_pose);

        if frame == args.select_frame {
            system.select_started(controller);
            info!("frame {frame}: trigger pressed");
        }
        if frame == args.release_frame {
            system.select_ended(controller);
            info!("frame {frame}: trigger released, teleporting = {}", system.is_teleporting());
        }

        system.update(&time, &input, house.surfaces(), &mut rig);

        let visuals = TeleportUi::build_visuals(&system, &style);
        if let Some(marker) = visuals.marker {
            tracing::debug!(
                "frame {frame}: marker at {:?} (scale {:.3})",
                marker.position,
                marker.scale
            );
        }
        if visuals.fade_opacity > 0.0 {
            tracing::debug!("frame {frame}: fade opacity {:.2}", visuals.fade_opacity);
        }
    }

    info!(
        "session end: rig at {:?}, camera at {:?}",
        rig.position,
        rig.camera_world_position()
    );
    Ok(())
}
