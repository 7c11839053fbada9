// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::clue::NewClue;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 线索提交请求数据传输对象
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClueRequestDto {
    /// 二维码内容
    #[validate(
        required(message = "Clue text and team name are required."),
        length(min = 1, message = "Clue text and team name are required.")
    )]
    pub text: Option<String>,
    /// 团队名称
    #[validate(
        required(message = "Clue text and team name are required."),
        length(min = 1, message = "Clue text and team name are required.")
    )]
    pub team_name: Option<String>,
    pub additional_text: Option<String>,
    pub image_path: Option<String>,
    /// image、video 或 gif，不做强制校验
    pub media_type: Option<String>,
}

impl CreateClueRequestDto {
    /// 转换为待保存的线索，应在校验通过后调用
    pub fn into_new_clue(self) -> NewClue {
        NewClue {
            text: self.text.unwrap_or_default(),
            team_name: self.team_name.unwrap_or_default(),
            additional_text: self.additional_text,
            image_path: self.image_path,
            media_type: self.media_type,
        }
    }
}
