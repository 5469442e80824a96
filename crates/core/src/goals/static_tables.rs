use crate::domain::goal::GoalAmount;
use crate::goals::table::GoalTable;

/// Compiled-in fallback goal data, used when the admin override store has
/// no entry. Keys are already in canonical form (lowercase agent names,
/// lowercase "month year" labels), matching the legacy dashboard's static
/// literals.
type StaticEntry = (&'static str, &'static [(&'static str, GoalAmount)]);

const STATIC_PROFIT_GOALS: &[StaticEntry] = &[
    (
        "oki irawan",
        &[
            ("july 2025", 98_000_000),
            ("august 2025", 105_000_000),
            ("september 2025", 105_000_000),
            ("october 2025", 110_000_000),
            ("november 2025", 110_000_000),
            ("december 2025", 120_000_000),
        ],
    ),
    (
        "fendi",
        &[
            ("july 2025", 76_000_000),
            ("august 2025", 80_000_000),
            ("september 2025", 80_000_000),
            ("october 2025", 84_000_000),
            ("november 2025", 84_000_000),
            ("december 2025", 90_000_000),
        ],
    ),
    (
        "sigit",
        &[
            ("july 2025", 64_000_000),
            ("august 2025", 68_000_000),
            ("september 2025", 68_000_000),
            ("october 2025", 70_000_000),
            ("november 2025", 70_000_000),
            ("december 2025", 75_000_000),
        ],
    ),
    (
        "national",
        &[
            ("july 2025", 238_000_000),
            ("august 2025", 253_000_000),
            ("september 2025", 253_000_000),
            ("october 2025", 264_000_000),
            ("november 2025", 264_000_000),
            ("december 2025", 285_000_000),
        ],
    ),
];

const STATIC_CASHIN_GOALS: &[StaticEntry] = &[
    (
        "oki irawan",
        &[
            ("july 2025", 88_000_000),
            ("august 2025", 95_000_000),
            ("september 2025", 95_000_000),
            ("october 2025", 99_000_000),
            ("november 2025", 99_000_000),
            ("december 2025", 108_000_000),
        ],
    ),
    (
        "fendi",
        &[
            ("july 2025", 68_000_000),
            ("august 2025", 72_000_000),
            ("september 2025", 72_000_000),
            ("october 2025", 76_000_000),
            ("november 2025", 76_000_000),
            ("december 2025", 81_000_000),
        ],
    ),
    (
        "sigit",
        &[
            ("july 2025", 58_000_000),
            ("august 2025", 61_000_000),
            ("september 2025", 61_000_000),
            ("october 2025", 63_000_000),
            ("november 2025", 63_000_000),
            ("december 2025", 68_000_000),
        ],
    ),
    (
        "national",
        &[
            ("july 2025", 214_000_000),
            ("august 2025", 228_000_000),
            ("september 2025", 228_000_000),
            ("october 2025", 238_000_000),
            ("november 2025", 238_000_000),
            ("december 2025", 257_000_000),
        ],
    ),
];

fn build(entries: &[StaticEntry]) -> GoalTable {
    let mut table = GoalTable::new();
    for (agent, months) in entries {
        for (label, amount) in *months {
            table.insert(agent, label, *amount);
        }
    }
    table
}

pub fn static_profit_goals() -> GoalTable {
    build(STATIC_PROFIT_GOALS)
}

pub fn static_cashin_goals() -> GoalTable {
    build(STATIC_CASHIN_GOALS)
}

#[cfg(test)]
mod tests {
    use crate::goals::table::NATIONAL_KEY;

    use super::{static_cashin_goals, static_profit_goals};

    #[test]
    fn profit_table_carries_known_agent_entries() {
        let table = static_profit_goals();
        assert_eq!(table.get("oki irawan", "august 2025"), Some(105_000_000));
        assert_eq!(table.get("fendi", "december 2025"), Some(90_000_000));
    }

    #[test]
    fn both_tables_have_a_national_bucket() {
        assert!(static_profit_goals().contains_agent(NATIONAL_KEY));
        assert!(static_cashin_goals().contains_agent(NATIONAL_KEY));
    }

    #[test]
    fn tables_cover_the_same_agents() {
        let profit: Vec<_> = static_profit_goals().agents().map(str::to_string).collect();
        let cashin: Vec<_> = static_cashin_goals().agents().map(str::to_string).collect();
        assert_eq!(profit, cashin);
    }
}
