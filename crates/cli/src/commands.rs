use sales_dashboard_core::errors::CoreError;
use sales_dashboard_core::models::filter::FilterAction;
use sales_dashboard_core::models::month::parse_month_filter;
use sales_dashboard_core::render::month::Section;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub const HELP: &str = "\
Commands:
  tx-month [month|all]     filter transactions by month
  stats-month [month|all]  filter statistics by month
  chart-month [month|all]  filter the bar chart by month
                           (no month lists the options)
  search [text]            search transactions (no text clears)
  page <n> | per-page <n>  set pagination
  next | prev              move one page
  refresh                  fetch again with the current filters
  show                     redraw the dashboard
  help | quit";

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Filter(FilterAction),
    ListMonths(Section),
    Refresh,
    Show,
    Help,
    Quit,
    Empty,
}

/// Parse a command line. Command names are case-insensitive; the search
/// text is kept verbatim apart from surrounding whitespace.
pub fn parse_command(line: &str) -> Result<Command, CoreError> {
    let line = line.trim();
    let (name, rest) = line
        .split_once(char::is_whitespace)
        .map(|(n, r)| (n, r.trim()))
        .unwrap_or((line, ""));

    let command = match name.to_ascii_lowercase().as_str() {
        "" => Command::Empty,
        "tx-month" | "stats-month" | "chart-month" if rest.is_empty() => {
            Command::ListMonths(section_of(name))
        }
        "tx-month" => Command::Filter(FilterAction::SetMonthTransactions(parse_month_filter(rest)?)),
        "stats-month" => Command::Filter(FilterAction::SetMonthStatistics(parse_month_filter(rest)?)),
        "chart-month" => Command::Filter(FilterAction::SetMonthBarChart(parse_month_filter(rest)?)),
        "search" => Command::Filter(FilterAction::SetSearch(rest.to_string())),
        "page" => Command::Filter(FilterAction::SetPage(parse_positive(name, rest)?)),
        "per-page" => Command::Filter(FilterAction::SetPerPage(parse_positive(name, rest)?)),
        "next" => Command::Filter(FilterAction::NextPage),
        "prev" | "previous" => Command::Filter(FilterAction::PreviousPage),
        "refresh" => Command::Refresh,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(CoreError::InvalidInput(format!("Unknown command: {other}"))),
    };
    Ok(command)
}

fn section_of(name: &str) -> Section {
    match name.to_ascii_lowercase().as_str() {
        "tx-month" => Section::Transactions,
        "stats-month" => Section::Statistics,
        _ => Section::BarChart,
    }
}

/// Read one input line, decoding invalid UTF-8 lossily. `Ok(None)` at EOF.
///
/// Bytes read so far stay in `buf` if the future is dropped mid-line, so
/// the caller keeps one `buf` across `select!` iterations.
pub async fn next_command_line<R>(reader: &mut R, buf: &mut Vec<u8>) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    reader.read_until(b'\n', buf).await?;
    if buf.is_empty() {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(buf)
        .trim_end_matches(['\r', '\n'])
        .to_string();
    buf.clear();
    Ok(Some(line))
}

fn parse_positive(name: &str, value: &str) -> Result<u32, CoreError> {
    match value.parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(CoreError::InvalidInput(format!(
            "{name} expects a positive integer, got '{value}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Month;
    use sales_dashboard_core::models::filter::FilterState;
    use sales_dashboard_core::render::month::render_month_selector;

    #[test]
    fn month_commands_target_their_own_section() {
        assert_eq!(
            parse_command("tx-month june").unwrap(),
            Command::Filter(FilterAction::SetMonthTransactions(Some(Month::June)))
        );
        assert_eq!(
            parse_command("stats-month Dec").unwrap(),
            Command::Filter(FilterAction::SetMonthStatistics(Some(Month::December)))
        );
        assert_eq!(
            parse_command("chart-month all").unwrap(),
            Command::Filter(FilterAction::SetMonthBarChart(None))
        );
    }

    #[test]
    fn bare_month_command_lists_options() {
        assert_eq!(
            parse_command("tx-month").unwrap(),
            Command::ListMonths(Section::Transactions)
        );
        assert_eq!(
            parse_command("STATS-MONTH  ").unwrap(),
            Command::ListMonths(Section::Statistics)
        );
        assert_eq!(
            parse_command("chart-month").unwrap(),
            Command::ListMonths(Section::BarChart)
        );
    }

    #[test]
    fn month_listing_shows_all_thirteen_options() {
        let Command::ListMonths(section) = parse_command("tx-month").unwrap() else {
            panic!("expected a month listing");
        };
        let listing = render_month_selector(section, &FilterState::default());
        let options: Vec<&str> = listing.lines().skip(1).collect();

        assert!(listing.starts_with("Filter Transactions by Month:"));
        assert_eq!(options.len(), 13);
        assert_eq!(options[0], "    All Months");
        assert_eq!(options[3], "  * March");
        assert_eq!(options[12], "    December");
        assert_eq!(listing.matches('*').count(), 1);
    }

    #[test]
    fn unknown_month_is_rejected() {
        assert!(parse_command("tx-month smarch").is_err());
    }

    #[test]
    fn search_keeps_inner_spaces() {
        assert_eq!(
            parse_command("  search  mens cotton  ").unwrap(),
            Command::Filter(FilterAction::SetSearch("mens cotton".into()))
        );
    }

    #[test]
    fn bare_search_clears() {
        assert_eq!(
            parse_command("search").unwrap(),
            Command::Filter(FilterAction::SetSearch(String::new()))
        );
    }

    #[test]
    fn pagination_commands() {
        assert_eq!(
            parse_command("next").unwrap(),
            Command::Filter(FilterAction::NextPage)
        );
        assert_eq!(
            parse_command("PREV").unwrap(),
            Command::Filter(FilterAction::PreviousPage)
        );
        assert_eq!(
            parse_command("per-page 25").unwrap(),
            Command::Filter(FilterAction::SetPerPage(25))
        );
        assert_eq!(
            parse_command("page 3").unwrap(),
            Command::Filter(FilterAction::SetPage(3))
        );
    }

    #[test]
    fn page_zero_and_garbage_are_rejected() {
        assert!(parse_command("page 0").is_err());
        assert!(parse_command("per-page ten").is_err());
        assert!(parse_command("page").is_err());
    }

    #[test]
    fn control_commands() {
        assert_eq!(parse_command("").unwrap(), Command::Empty);
        assert_eq!(parse_command("refresh").unwrap(), Command::Refresh);
        assert_eq!(parse_command("show").unwrap(), Command::Show);
        assert_eq!(parse_command("help").unwrap(), Command::Help);
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
        assert!(parse_command("frobnicate").is_err());
    }

    #[tokio::test]
    async fn invalid_utf8_input_does_not_end_the_session() {
        let mut input: &[u8] = b"search \xff\xfe\nshow\r\nquit";
        let mut buf = Vec::new();

        let first = next_command_line(&mut input, &mut buf).await.unwrap().unwrap();
        assert_eq!(first, "search \u{FFFD}\u{FFFD}");
        assert_eq!(
            parse_command(&first).unwrap(),
            Command::Filter(FilterAction::SetSearch("\u{FFFD}\u{FFFD}".into()))
        );

        let second = next_command_line(&mut input, &mut buf).await.unwrap().unwrap();
        assert_eq!(parse_command(&second).unwrap(), Command::Show);

        let third = next_command_line(&mut input, &mut buf).await.unwrap().unwrap();
        assert_eq!(parse_command(&third).unwrap(), Command::Quit);

        assert_eq!(next_command_line(&mut input, &mut buf).await.unwrap(), None);
    }
}
