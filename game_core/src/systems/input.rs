use hecs::World;

use crate::components::{Paddle, PaddleIntent};
use crate::input::ActionState;

/// Turn held actions into each paddle's movement intent
pub fn ingest_inputs(world: &mut World, actions: &ActionState) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        intent.dir = actions.axis(paddle.side.up_action(), paddle.side.down_action());
    }
}
