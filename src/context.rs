// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Context carries what a Render sees every frame: the frame counter,
//! the grid size, the shared runtime flags and the display adapter.

use crate::{event::RuntimeFlags, render::adapter::Adapter};
use std::sync::Arc;

pub struct Context {
    pub stage: u32,
    pub width: u16,
    pub height: u16,
    pub flags: Arc<RuntimeFlags>,
    pub adapter: Box<dyn Adapter>,
}

impl Context {
    pub fn new(adapter: Box<dyn Adapter>, flags: Arc<RuntimeFlags>) -> Self {
        Self {
            stage: 0,
            width: 0,
            height: 0,
            flags,
            adapter,
        }
    }
}
