use clap::Parser as _;
use romareport::BaseArgs;

pub fn main() -> anyhow::Result<()> {
    let args = BaseArgs::parse();
    args.evaluate()
}
