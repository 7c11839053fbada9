// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 团队（team）：游戏中的身份与进度单位，没有个人账户
/// - 线索（clue）：某个团队扫描到的一条二维码内容
///
/// 线索通过团队名称松散地关联到团队，不做外键约束，也不级联删除。
pub mod clue;
pub mod team;
