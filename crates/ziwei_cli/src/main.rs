use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use ziwei_base::{ALL_BRANCHES, overlay_names, ziwei_anchor_for_number};
use ziwei_rs::{
    BirthInput, Branch, ChartConfig, ChartResult, Gender, PlacedStar, SolarDate, ZiweiError,
    chart_with_config, luck_info, palace_positions, palace_relationship, year_pillar,
};

#[derive(Parser)]
#[command(name = "ziwei", about = "ZiWei DouShu natal chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full twelve-palace chart
    Chart {
        /// Lunar year (1900-2100)
        #[arg(long)]
        year: i32,
        /// Lunar month (1-12)
        #[arg(long)]
        month: u8,
        /// Lunar day (1-30)
        #[arg(long)]
        day: u8,
        /// Clock hour (0-23)
        #[arg(long)]
        hour: u8,
        /// male or female
        #[arg(long)]
        gender: Gender,
        /// The lunar month is a leap month
        #[arg(long)]
        leap: bool,
        /// Solar date (YYYY-MM-DD) for the day and hour pillars
        #[arg(long)]
        solar: Option<String>,
        /// Label the annual palace and minor limit of this year
        #[arg(long)]
        reference_year: Option<i32>,
        /// Skip the minor stars
        #[arg(long)]
        no_minor: bool,
        /// Skip the four transformations
        #[arg(long)]
        no_sihua: bool,
        /// Print the chart as JSON
        #[arg(long)]
        json: bool,
    },
    /// Trine and opposite palaces of a palace
    Relations {
        /// Branch index (0=子 .. 11=亥)
        index: u8,
    },
    /// Life and body palaces from lunar month and hour
    Palaces {
        /// Lunar month (1-12)
        #[arg(long)]
        month: u8,
        /// Clock hour (0-23)
        #[arg(long)]
        hour: u8,
    },
    /// Decade, annual palace and minor limit for a year
    Luck {
        /// Lunar birth year (1900-2100)
        #[arg(long)]
        year: i32,
        /// Lunar month (1-12)
        #[arg(long)]
        month: u8,
        /// Lunar day (1-30)
        #[arg(long)]
        day: u8,
        /// Clock hour (0-23)
        #[arg(long)]
        hour: u8,
        /// male or female
        #[arg(long)]
        gender: Gender,
        /// Year to evaluate
        #[arg(long)]
        target_year: i32,
    },
    /// Sexagenary year pillar
    Pillar {
        /// Year
        year: i32,
    },
    /// 紫微 position from bureau number and lunar day
    Anchor {
        /// Bureau number (2-6)
        #[arg(long)]
        bureau: u8,
        /// Lunar day (1-30)
        #[arg(long)]
        day: u8,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn parse_solar(s: &str) -> Result<SolarDate, String> {
    let parts: Vec<&str> = s.trim().split('-').collect();
    if parts.len() != 3 {
        return Err(format!("expected YYYY-MM-DD, got {s}"));
    }
    let year: i32 = parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u8 = parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u8 = parts[2].parse().map_err(|e| format!("{e}"))?;
    Ok(SolarDate::new(year, month, day))
}

fn require<T>(result: Result<T, ZiweiError>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

/// "紫微(庙) A iC".
fn format_star(star: &PlacedStar, at: Branch) -> String {
    let mut out = format!("{}({})", star.star.name(), star.brightness.name());
    for mark in &star.marks {
        out.push(' ');
        out.push_str(&mark.code(at));
    }
    out
}

fn print_chart(c: &ChartResult) {
    let p = &c.pillars;
    println!("{}  {}", c.lunar_date, c.input.gender.name());
    println!(
        "四柱: {} {} {} {}",
        p.year,
        p.month,
        p.day.map_or_else(|| "--".to_string(), |g| g.to_string()),
        p.hour.map_or_else(|| "--".to_string(), |g| g.to_string())
    );
    println!(
        "{}  命主 {}  身主 {}  {}",
        c.bureau.name(),
        c.life_lord.name(),
        c.body_lord.name(),
        c.body_life_relation.name()
    );
    println!(
        "大限 {}  斗君 {}  先天斗君 {}",
        c.decade_direction.name(),
        c.dou_jun.name(),
        c.innate_dou_jun.name()
    );
    println!();

    // 大限/流年 overlays follow the reference year when one is set.
    let annual = c.palaces.iter().find_map(|p| p.annual);
    let annual_names = annual.map(|a| overlay_names(a.branch));
    let decade_names = annual
        .and_then(|a| c.decade_for_age(a.nominal_age))
        .map(|d| overlay_names(d.branch));
    for branch in ALL_BRANCHES {
        let i = branch.index() as usize;
        let palace = c.palace(branch);
        let mut flags = Vec::new();
        if palace.is_body {
            flags.push("身".to_string());
        }
        if palace.is_lai_yin {
            flags.push("来因".to_string());
        }
        if let Some(a) = palace.annual {
            flags.push(format!("流年{} ({}岁)", a.ganzhi, a.nominal_age));
        }
        if palace.is_minor_limit {
            flags.push("小限".to_string());
        }
        if let Some(names) = decade_names {
            flags.push(format!("大{}", names[i].short_name()));
        }
        if let Some(names) = annual_names {
            flags.push(format!("流{}", names[i].short_name()));
        }
        let stars: Vec<String> = palace.stars.iter().map(|s| format_star(s, branch)).collect();
        println!(
            "{:<8} [{}] {} {}",
            palace.label(),
            palace.decade.label(),
            flags.join(" "),
            stars.join(", ")
        );
    }

    if !c.flying.is_empty() {
        println!();
        println!("飞化: {} edges", c.flying.len());
        for edge in &c.flying {
            println!(
                "  {} -> {} {}{}",
                edge.source.name(),
                edge.target.name(),
                edge.star.name(),
                edge.mark.name()
            );
        }
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Chart {
            year,
            month,
            day,
            hour,
            gender,
            leap,
            solar,
            reference_year,
            no_minor,
            no_sihua,
            json,
        } => {
            let mut input = BirthInput::new(year, month, day, hour, gender).with_leap_month(leap);
            if let Some(s) = solar {
                let date = parse_solar(&s).unwrap_or_else(|e| {
                    eprintln!("Invalid solar date: {e}");
                    std::process::exit(1);
                });
                input = input.with_solar(date);
            }
            let mut config = ChartConfig::default()
                .with_minor_stars(!no_minor)
                .with_sihua(!no_sihua);
            if let Some(y) = reference_year {
                config = config.with_reference_year(y);
            }
            let chart = require(chart_with_config(&input, &config));
            if json {
                match serde_json::to_string_pretty(&chart) {
                    Ok(s) => println!("{s}"),
                    Err(e) => {
                        eprintln!("Failed to serialize chart: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                print_chart(&chart);
            }
        }

        Commands::Relations { index } => {
            let r = require(palace_relationship(index));
            println!(
                "{}: 三合 {} {}  对宫 {}",
                r.palace.name(),
                r.trine[0].name(),
                r.trine[1].name(),
                r.opposite.name()
            );
            let set: Vec<&str> = r
                .three_sides_four_directions()
                .iter()
                .map(|b| b.name())
                .collect();
            println!("三方四正: {}", set.join(" "));
        }

        Commands::Palaces { month, hour } => {
            let pos = require(palace_positions(month, hour));
            println!("时辰: {}时", pos.hour_branch.name());
            println!("命宫: {}", pos.life.name());
            println!("身宫: {}", pos.body.name());
            println!("{}", pos.relation.name());
        }

        Commands::Luck {
            year,
            month,
            day,
            hour,
            gender,
            target_year,
        } => {
            let input = BirthInput::new(year, month, day, hour, gender);
            let info = require(luck_info(&input, target_year));
            println!("{} 虚岁 {}", info.annual.ganzhi, info.nominal_age);
            match info.decade {
                Some(d) => println!(
                    "大限: {} (第{}限, {})",
                    d.label(),
                    d.order,
                    info.direction.name()
                ),
                None => println!("大限: 未起运"),
            }
            println!("流年: {}", info.annual.branch.name());
            println!("小限: {}", info.minor_limit.name());
        }

        Commands::Pillar { year } => {
            let gz = year_pillar(year);
            println!("{year}: {gz} (cycle index {})", gz.cycle_index());
        }

        Commands::Anchor { bureau, day } => {
            let branch = require(ziwei_anchor_for_number(bureau, day));
            println!("紫微: {}", branch.name());
        }
    }
}
