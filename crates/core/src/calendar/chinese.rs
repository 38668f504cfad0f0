//! Chinese exchange closure dates (SSE/SZSE), 2024–2026.
//!
//! Weekend closures are excluded: the session clock already skips
//! Saturday and Sunday, so only weekday closures are listed here.
//! 2024 and 2025 follow the published exchange schedules; 2026 follows
//! the State Council public-holiday plan and should be refreshed once
//! the exchanges publish their own notice.

/// (year, month, day) closure tuples, chronological.
pub const EXCHANGE_CLOSURES: &[(i32, u32, u32)] = &[
    // ── 2024 ─────────────────────────────────────────────────────────
    (2024, 1, 1),   // 元旦
    (2024, 2, 9),   // 春节
    (2024, 2, 12),  // 春节
    (2024, 2, 13),  // 春节
    (2024, 2, 14),  // 春节
    (2024, 2, 15),  // 春节
    (2024, 2, 16),  // 春节
    (2024, 4, 4),   // 清明节
    (2024, 4, 5),   // 清明节
    (2024, 5, 1),   // 劳动节
    (2024, 5, 2),   // 劳动节
    (2024, 5, 3),   // 劳动节
    (2024, 6, 10),  // 端午节
    (2024, 9, 16),  // 中秋节
    (2024, 9, 17),  // 中秋节
    (2024, 10, 1),  // 国庆节
    (2024, 10, 2),  // 国庆节
    (2024, 10, 3),  // 国庆节
    (2024, 10, 4),  // 国庆节
    (2024, 10, 7),  // 国庆节
    // ── 2025 ─────────────────────────────────────────────────────────
    (2025, 1, 1),   // 元旦
    (2025, 1, 28),  // 春节
    (2025, 1, 29),  // 春节
    (2025, 1, 30),  // 春节
    (2025, 1, 31),  // 春节
    (2025, 2, 3),   // 春节
    (2025, 2, 4),   // 春节
    (2025, 4, 4),   // 清明节
    (2025, 5, 1),   // 劳动节
    (2025, 5, 2),   // 劳动节
    (2025, 5, 5),   // 劳动节
    (2025, 6, 2),   // 端午节
    (2025, 10, 1),  // 国庆节·中秋节
    (2025, 10, 2),  // 国庆节·中秋节
    (2025, 10, 3),  // 国庆节·中秋节
    (2025, 10, 6),  // 国庆节·中秋节
    (2025, 10, 7),  // 国庆节·中秋节
    (2025, 10, 8),  // 国庆节·中秋节
    // ── 2026 ─────────────────────────────────────────────────────────
    (2026, 1, 1),   // 元旦
    (2026, 1, 2),   // 元旦
    (2026, 2, 16),  // 春节
    (2026, 2, 17),  // 春节
    (2026, 2, 18),  // 春节
    (2026, 2, 19),  // 春节
    (2026, 2, 20),  // 春节
    (2026, 4, 6),   // 清明节
    (2026, 5, 1),   // 劳动节
    (2026, 5, 4),   // 劳动节
    (2026, 5, 5),   // 劳动节
    (2026, 6, 19),  // 端午节
    (2026, 9, 25),  // 中秋节
    (2026, 10, 1),  // 国庆节
    (2026, 10, 2),  // 国庆节
    (2026, 10, 5),  // 国庆节
    (2026, 10, 6),  // 国庆节
    (2026, 10, 7),  // 国庆节
];
