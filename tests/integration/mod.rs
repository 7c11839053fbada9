// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod clue_api_test;
pub mod client_test;
pub mod team_api_test;
