#![no_std]

pub mod sale;
