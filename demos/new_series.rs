use scoreboard_client::{GameType, MatchFormat, NewMatchForm, ScoreboardClient, TeamSide};

#[tokio::main]
async fn main() {
    let client = match std::env::args().nth(1) {
        Some(url) => ScoreboardClient::with_base_url(url),
        None => ScoreboardClient::new(),
    };

    let roster = client.get_players().await.unwrap();
    println!("Found {} players", roster.len());

    let mut form = NewMatchForm::new();
    form.game = GameType::Lol;
    form.format = MatchFormat::Bo3;
    for player in roster.iter().take(10) {
        form.toggle_player(player.id);
    }

    let teams = form
        .draw(&roster, &mut rand::thread_rng())
        .expect("need at least ten players")
        .clone();
    for side in [TeamSide::A, TeamSide::B] {
        println!("Team {side}:");
        for drafted in teams.team(side) {
            let role = drafted.role.map(|r| r.to_string()).unwrap_or_default();
            println!("  {} {}", drafted.player.name, role.to_uppercase());
        }
    }

    let report = form.submit(&client).await.unwrap();
    println!(
        "Created matches {:?} ({} stat rows failed)",
        report.match_ids, report.failed_stats
    );

    let mut sheet = client.load_match(report.match_ids[0]).await.unwrap();
    sheet.set_score(TeamSide::A, 1);
    sheet.save(&client).await.unwrap();
    println!("Saved match {}", sheet.record().id);
}
