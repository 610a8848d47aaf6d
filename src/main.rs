fn main() -> anyhow::Result<()> {
  week_planner_lib::run()
}
