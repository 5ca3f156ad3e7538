// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module

mod command_execution;
mod event_replay;
