//! Typed filter commands for the command filter mode.
//!
//! A command is `<column><op><value>`, where the column is matched by id or
//! label and `op` is one of `:`, `=`, `!=`, `>`, `>=`, `<`, `<=`. The value
//! `empty` with `:`/`=` or `!=` checks for missing values.

use super::column::{ColumnFilter, ColumnMeta};
use chrono::NaiveDate;
use contracts::shared::table_query::{FilterCondition, FilterOperator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Colon,
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
}

// Two-character tokens first so `>=` wins over `>` at the same position
const TOKENS: [(&str, Token); 7] = [
    (">=", Token::Gte),
    ("<=", Token::Lte),
    ("!=", Token::Ne),
    (">", Token::Gt),
    ("<", Token::Lt),
    (":", Token::Colon),
    ("=", Token::Eq),
];

/// Condition parsed from a command, before it gets a filter id
#[derive(Debug, Clone, PartialEq)]
pub struct CommandFilter {
    pub id: String,
    pub operator: FilterOperator,
    pub value: String,
}

impl CommandFilter {
    pub fn into_condition(self, filter_id: String) -> FilterCondition {
        FilterCondition {
            filter_id,
            id: self.id,
            operator: self.operator,
            value: self.value,
        }
    }
}

fn find_token(input: &str) -> Option<(usize, &'static str, Token)> {
    let mut best: Option<(usize, &'static str, Token)> = None;
    for (text, token) in TOKENS {
        if let Some(pos) = input.find(text) {
            if best.map_or(true, |(p, _, _)| pos < p) {
                best = Some((pos, text, token));
            }
        }
    }
    best
}

pub fn parse_filter_command(input: &str, columns: &[ColumnMeta]) -> Result<CommandFilter, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Type a filter, e.g. status:done".to_string());
    }
    let Some((pos, text, token)) = find_token(input) else {
        return Err(format!("Missing operator in \"{}\"", input));
    };

    let field = input[..pos].trim();
    let value = input[pos + text.len()..].trim();
    if field.is_empty() {
        return Err("Missing column name".to_string());
    }

    let Some((column, filter)) = columns.iter().find_map(|c| {
        let matches = c.id.eq_ignore_ascii_case(field) || c.label.eq_ignore_ascii_case(field);
        match &c.filter {
            Some(filter) if matches => Some((c, filter)),
            _ => None,
        }
    }) else {
        return Err(format!("Unknown column \"{}\"", field));
    };

    if value.eq_ignore_ascii_case("empty") {
        let operator = match token {
            Token::Colon | Token::Eq => FilterOperator::IsEmpty,
            Token::Ne => FilterOperator::IsNotEmpty,
            _ => return Err(format!("\"{}\" only works with : and !=", value)),
        };
        return Ok(CommandFilter {
            id: column.id.to_string(),
            operator,
            value: String::new(),
        });
    }
    if value.is_empty() {
        return Err(format!("Missing value for {}", column.label));
    }

    let is_text = matches!(filter, ColumnFilter::Text { .. });
    let operator = match token {
        Token::Colon if is_text => FilterOperator::ILike,
        Token::Ne if is_text => FilterOperator::NotILike,
        Token::Colon | Token::Eq => FilterOperator::Eq,
        Token::Ne => FilterOperator::Ne,
        Token::Gt => FilterOperator::Gt,
        Token::Gte => FilterOperator::Gte,
        Token::Lt => FilterOperator::Lt,
        Token::Lte => FilterOperator::Lte,
    };
    if !filter.operators().contains(&operator) {
        return Err(format!("{} does not support {}", column.label, text));
    }

    let value = match filter {
        ColumnFilter::Text { .. } => value.to_string(),
        ColumnFilter::MultiSelect { .. } => filter
            .match_option(value)
            .ok_or_else(|| format!("Unknown value \"{}\" for {}", value, column.label))?,
        ColumnFilter::Range { .. } => {
            let number: f64 = value
                .parse()
                .map_err(|_| format!("\"{}\" is not a number", value))?;
            number.to_string()
        }
        ColumnFilter::Date => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map_err(|_| format!("\"{}\" is not a date like 2024-01-31", value))?
            .to_string(),
    };

    Ok(CommandFilter {
        id: column.id.to_string(),
        operator,
        value,
    })
}

/// Short text shown on a filter chip
pub fn describe_condition(condition: &FilterCondition, columns: &[ColumnMeta]) -> String {
    let label = columns
        .iter()
        .find(|c| c.id == condition.id)
        .map(|c| c.label.as_str())
        .unwrap_or(condition.id.as_str());
    if condition.operator.is_value_less() {
        format!("{} {}", label, condition.operator.label())
    } else {
        format!("{} {} {}", label, condition.operator.label(), condition.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::column::FilterOption;

    fn columns() -> Vec<ColumnMeta> {
        vec![
            ColumnMeta {
                id: "title",
                label: "Title".into(),
                sortable: true,
                hideable: false,
                filter: Some(ColumnFilter::Text { placeholder: String::new() }),
            },
            ColumnMeta {
                id: "status",
                label: "Status".into(),
                sortable: true,
                hideable: true,
                filter: Some(ColumnFilter::MultiSelect {
                    options: vec![
                        FilterOption::new("todo", "Todo"),
                        FilterOption::new("in-progress", "In Progress"),
                    ],
                }),
            },
            ColumnMeta {
                id: "estimatedHours",
                label: "Est. Hours".into(),
                sortable: true,
                hideable: true,
                filter: Some(ColumnFilter::Range { min: 0.0, max: 24.0, unit: Some("hr".into()) }),
            },
            ColumnMeta {
                id: "createdAt",
                label: "Created At".into(),
                sortable: true,
                hideable: true,
                filter: Some(ColumnFilter::Date),
            },
            ColumnMeta {
                id: "code",
                label: "Task".into(),
                sortable: false,
                hideable: false,
                filter: None,
            },
        ]
    }

    fn parsed(id: &str, operator: FilterOperator, value: &str) -> CommandFilter {
        CommandFilter {
            id: id.into(),
            operator,
            value: value.into(),
        }
    }

    #[test]
    fn test_text_column_uses_like() {
        assert_eq!(
            parse_filter_command("title: fix login", &columns()),
            Ok(parsed("title", FilterOperator::ILike, "fix login"))
        );
        assert_eq!(
            parse_filter_command("Title!=draft", &columns()),
            Ok(parsed("title", FilterOperator::NotILike, "draft"))
        );
    }

    #[test]
    fn test_select_value_matched_by_label() {
        assert_eq!(
            parse_filter_command("status:in progress", &columns()),
            Ok(parsed("status", FilterOperator::Eq, "in-progress"))
        );
        assert!(parse_filter_command("status:later", &columns()).is_err());
    }

    #[test]
    fn test_numeric_comparisons() {
        assert_eq!(
            parse_filter_command("estimatedHours>=2.5", &columns()),
            Ok(parsed("estimatedHours", FilterOperator::Gte, "2.5"))
        );
        assert_eq!(
            parse_filter_command("est. hours < 8", &columns()),
            Ok(parsed("estimatedHours", FilterOperator::Lt, "8"))
        );
        assert!(parse_filter_command("estimatedHours>many", &columns()).is_err());
        assert!(parse_filter_command("title>3", &columns()).is_err());
    }

    #[test]
    fn test_dates_and_empty_checks() {
        assert_eq!(
            parse_filter_command("createdAt>2024-01-31", &columns()),
            Ok(parsed("createdAt", FilterOperator::Gt, "2024-01-31"))
        );
        assert!(parse_filter_command("createdAt>yesterday", &columns()).is_err());
        assert_eq!(
            parse_filter_command("title:empty", &columns()),
            Ok(parsed("title", FilterOperator::IsEmpty, ""))
        );
        assert_eq!(
            parse_filter_command("status != EMPTY", &columns()),
            Ok(parsed("status", FilterOperator::IsNotEmpty, ""))
        );
    }

    #[test]
    fn test_rejects_malformed_commands() {
        let columns = columns();
        assert!(parse_filter_command("", &columns).is_err());
        assert!(parse_filter_command("status", &columns).is_err());
        assert!(parse_filter_command(":done", &columns).is_err());
        assert!(parse_filter_command("owner:me", &columns).is_err());
        assert!(parse_filter_command("code:T-1", &columns).is_err());
        assert!(parse_filter_command("title:", &columns).is_err());
    }

    #[test]
    fn test_chip_text() {
        let condition = parsed("status", FilterOperator::Eq, "todo").into_condition("f1".into());
        assert_eq!(condition.filter_id, "f1");
        let text = describe_condition(&condition, &columns());
        assert!(text.starts_with("Status "));
        assert!(text.ends_with(" todo"));
    }
}
