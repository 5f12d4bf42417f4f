use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "sagasu")]
pub struct Opt {
    /// Log group names or patterns, like "/ecs/myservice0" or "*service*".
    /// A "*" in a pattern spans any run of characters; matching patterns
    /// against the remote listing is noticeably slower than plain names.
    #[structopt(short, long)]
    pub groups: Vec<String>,

    /// Start time, optionally followed by an end time (defaults to now).
    /// ISO time "2020-05-24T00:00:00", epoch seconds "1590314700",
    /// or relative to now like "1h", "1h 30m", "1y 1mo 1w 1d".
    #[structopt(short, long, max_values = 2)]
    pub time: Vec<String>,

    /// Query exactly as it is written in the CloudWatch Insights console,
    /// e.g. "fields @message | filter @message like 'event' | limit 10".
    #[structopt(short, long)]
    pub query: Option<String>,

    /// Optional prefix prepended to every printed record.
    #[structopt(short, long)]
    pub separator: Option<String>,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Mode {
    /// Not enough flags for anything useful, show usage instead.
    Help,
    /// Only groups were given, resolve and print them.
    ListGroups,
    /// Groups, a time range and a query, run the whole thing.
    Query,
}

impl Opt {
    pub fn mode(&self) -> Mode {
        if !self.groups.is_empty() && self.time.is_empty() && self.query.is_none() {
            return Mode::ListGroups;
        }
        if !self.groups.is_empty() && !self.time.is_empty() && self.query.is_some() {
            return Mode::Query;
        }
        Mode::Help
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opt(args: &[&str]) -> Opt {
        Opt::from_iter(std::iter::once("sagasu").chain(args.iter().copied()))
    }

    #[test]
    fn no_flags_asks_for_help() {
        assert_eq!(opt(&[]).mode(), Mode::Help);
    }

    #[test]
    fn groups_alone_lists_them() {
        assert_eq!(opt(&["-g", "/ecs/myservice0"]).mode(), Mode::ListGroups);
    }

    #[test]
    fn groups_with_time_but_no_query_is_not_enough() {
        assert_eq!(opt(&["-g", "/ecs/myservice0", "-t", "1h"]).mode(), Mode::Help);
    }

    #[test]
    fn all_three_flags_run_a_query() {
        let opt = opt(&[
            "-g",
            "/ecs/myservice0",
            "-t",
            "5h",
            "1h",
            "-q",
            "fields @message",
        ]);
        assert_eq!(opt.mode(), Mode::Query);
        assert_eq!(opt.time, vec!["5h".to_owned(), "1h".to_owned()]);
    }

    #[test]
    fn separator_is_optional_sugar() {
        let opt = opt(&["-g", "/ecs/myservice0", "-s", "| "]);
        assert_eq!(opt.mode(), Mode::ListGroups);
        assert_eq!(opt.separator.as_deref(), Some("| "));
    }
}
