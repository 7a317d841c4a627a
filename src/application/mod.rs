// Application module: conversion use cases

pub mod config;
pub mod error;
pub mod mappers;

pub use config::*;
pub use error::*;
pub use mappers::*;
