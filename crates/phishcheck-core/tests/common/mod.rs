#![allow(dead_code)]

pub mod status_server;
