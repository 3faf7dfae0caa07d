use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use digitlist::{karatsuba_mul, schoolbook_mul, subtract, DigitList};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Op {
    Add,
    Sub,
    Mul,
    Cmp,
}

/// Decimal arithmetic on arbitrarily long non-negative integers.
#[derive(Parser, Debug)]
#[command(name = "digitlist", version)]
struct Cli {
    /// Left operand, in decimal
    lhs: String,
    #[arg(value_enum)]
    op: Op,
    /// Right operand, in decimal
    rhs: String,
    /// Cross-check `mul` against schoolbook multiplication
    #[arg(long)]
    check: bool,
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("digitlist=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("digitlist=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let lhs: DigitList = cli
        .lhs
        .parse()
        .with_context(|| format!("bad left operand {:?}", cli.lhs))?;
    let rhs: DigitList = cli
        .rhs
        .parse()
        .with_context(|| format!("bad right operand {:?}", cli.rhs))?;
    tracing::debug!(lhs_len = lhs.len(), rhs_len = rhs.len(), op = ?cli.op, "parsed operands");

    let out = match cli.op {
        Op::Add => (&lhs + &rhs).to_string(),
        Op::Sub => subtract(&lhs, &rhs)?.to_string(),
        Op::Mul => {
            let prod = karatsuba_mul(&lhs, &rhs);
            if cli.check {
                let expected = schoolbook_mul(&lhs, &rhs);
                if prod != expected {
                    bail!("karatsuba gave {} but schoolbook gave {}", prod, expected);
                }
                tracing::info!(digits = prod.len(), "schoolbook check passed");
            }
            prod.to_string()
        }
        Op::Cmp => match lhs.cmp(&rhs) {
            std::cmp::Ordering::Less => "<".to_string(),
            std::cmp::Ordering::Equal => "=".to_string(),
            std::cmp::Ordering::Greater => ">".to_string(),
        },
    };
    Ok(out)
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(&cli) {
        Ok(out) => println!("{}", out),
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("error: {:#}", e);
            std::process::exit(1);
        }
    }
}
