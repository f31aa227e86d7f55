//! Camera rig system: places each side-view camera at the end of its boom.

use glam::Vec3;
use hecs::World;

use factotum_core::components::{CameraBoom, SideViewCamera, Transform};
use factotum_core::constants::FLOOR_Z;

pub fn run(world: &mut World) {
    for (_entity, (transform, boom, camera)) in
        world.query_mut::<(&Transform, &CameraBoom, &mut SideViewCamera)>()
    {
        let rotation = if boom.absolute_rotation {
            boom.rotation
        } else {
            transform.rotation
        };
        let pivot = transform.location;
        let mut arm_end = pivot - rotation.forward() * boom.arm_length;
        if boom.do_collision_test {
            arm_end = clip_to_floor(pivot, arm_end);
        }
        camera.location = arm_end + rotation.rotate_yaw(boom.socket_offset);
        if !camera.use_pawn_control_rotation {
            camera.rotation = rotation;
        }
    }
}

/// Shorten the arm from `pivot` to `arm_end` at the floor plane.
fn clip_to_floor(pivot: Vec3, arm_end: Vec3) -> Vec3 {
    if arm_end.z >= FLOOR_Z || pivot.z <= FLOOR_Z {
        return arm_end;
    }
    let t = (pivot.z - FLOOR_Z) / (pivot.z - arm_end.z);
    pivot.lerp(arm_end, t)
}
