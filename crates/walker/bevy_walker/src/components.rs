use bevy::prelude::*;
use walker_core::Joint;

/// Entity that follows the figure root: translation, heading and torso lean.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct WalkerRoot;

/// Entity whose local rotation about X mirrors one joint of the figure.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkerJoint(pub Joint);
