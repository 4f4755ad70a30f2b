//! Round engine integration tests.

use blackjack::{
    ActionError, Card, DEALER_STANDS_ON, DECK_SIZE, DealError, Deck, Game, GameState, Outcome,
    Rank, ShowdownError, Suit, hand_value,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Builds a game whose deck deals `draws` in order.
fn stacked(draws: &[Card]) -> Game {
    let mut deck: Vec<Card> = draws.to_vec();
    deck.reverse();
    Game::new(Deck::from_cards(deck))
}

fn cards_in_play(game: &Game) -> usize {
    game.cards_remaining() + game.player_hand().len() + game.dealer_hand().len()
}

#[test]
fn opening_deal_alternates_player_first() {
    let mut game = stacked(&[
        card(Suit::Hearts, Rank::Two),   // player
        card(Suit::Spades, Rank::Ten),   // dealer hole
        card(Suit::Clubs, Rank::Three),  // player
        card(Suit::Diamonds, Rank::Six), // dealer up
    ]);

    game.deal().unwrap();
    assert_eq!(game.state(), GameState::CheckingNaturals);
    assert_eq!(
        game.player_hand().cards(),
        &[card(Suit::Hearts, Rank::Two), card(Suit::Clubs, Rank::Three)]
    );
    assert_eq!(
        game.dealer_hand().cards(),
        &[card(Suit::Spades, Rank::Ten), card(Suit::Diamonds, Rank::Six)]
    );
    assert!(!game.dealer_hand().is_hole_revealed());

    assert!(!game.check_naturals().unwrap());
    assert_eq!(game.state(), GameState::PlayerTurn);
}

#[test]
fn deal_from_full_deck_conserves_cards() {
    let mut game = Game::new(Deck::shuffled_with_seed(3));
    assert_eq!(game.cards_remaining(), DECK_SIZE);

    game.deal().unwrap();
    assert_eq!(game.cards_remaining(), DECK_SIZE - 4);
    assert_eq!(cards_in_play(&game), DECK_SIZE);
}

#[test]
fn player_natural_wins_before_any_decision() {
    let mut game = stacked(&[
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Spades, Rank::Nine),
        card(Suit::Clubs, Rank::King),
        card(Suit::Diamonds, Rank::Five),
    ]);

    game.deal().unwrap();
    assert!(game.check_naturals().unwrap());
    assert_eq!(game.state(), GameState::Resolution);
    assert!(game.dealer_hand().is_hole_revealed());
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);

    let result = game.resolve().unwrap();
    assert_eq!(result.outcome, Outcome::Blackjack);
    assert_eq!(result.player_value, 21);
    assert_eq!(result.dealer_value, 14);
    assert!(!result.dealer_played);
    assert_eq!(game.state(), GameState::Done);
}

#[test]
fn dealer_natural_wins() {
    let mut game = stacked(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Ace),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Diamonds, Rank::Queen),
    ]);

    game.deal().unwrap();
    assert!(game.check_naturals().unwrap());
    assert_eq!(game.resolve().unwrap().outcome, Outcome::DealerBlackjack);
}

#[test]
fn two_naturals_draw() {
    let mut game = stacked(&[
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Spades, Rank::Ace),
        card(Suit::Clubs, Rank::Jack),
        card(Suit::Diamonds, Rank::King),
    ]);

    game.deal().unwrap();
    assert!(game.check_naturals().unwrap());
    assert_eq!(game.resolve().unwrap().outcome, Outcome::Draw);
}

#[test]
fn player_busts_without_dealer_playing() {
    let mut game = stacked(&[
        card(Suit::Hearts, Rank::Two),
        card(Suit::Spades, Rank::Ten),
        card(Suit::Clubs, Rank::Three),
        card(Suit::Diamonds, Rank::Six),
        card(Suit::Hearts, Rank::King),    // first hit
        card(Suit::Diamonds, Rank::Seven), // second hit
    ]);

    game.deal().unwrap();
    assert!(!game.check_naturals().unwrap());

    assert_eq!(game.hit().unwrap(), card(Suit::Hearts, Rank::King));
    assert_eq!(game.player_hand().value(), 15);
    assert_eq!(game.state(), GameState::PlayerTurn);

    assert_eq!(game.hit().unwrap(), card(Suit::Diamonds, Rank::Seven));
    assert_eq!(game.player_hand().value(), 22);
    assert_eq!(game.state(), GameState::Resolution);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);
    assert_eq!(
        game.dealer_play().unwrap_err(),
        ShowdownError::InvalidState
    );

    let result = game.resolve().unwrap();
    assert_eq!(result.outcome, Outcome::Bust);
    assert!(!result.dealer_played);
    assert_eq!(game.dealer_hand().len(), 2);
}

#[test]
fn hitting_to_twenty_one_wins_immediately() {
    let mut game = stacked(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Nine),
        card(Suit::Clubs, Rank::Five),
        card(Suit::Diamonds, Rank::Seven),
        card(Suit::Hearts, Rank::Six),
    ]);

    game.deal().unwrap();
    game.check_naturals().unwrap();
    game.hit().unwrap();

    assert_eq!(game.state(), GameState::Resolution);
    let result = game.resolve().unwrap();
    assert_eq!(result.outcome, Outcome::Win);
    assert_eq!(result.player_value, 21);
    assert!(!result.dealer_played);
}

#[test]
fn dealer_draws_to_seventeen_and_wins() {
    let mut game = stacked(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Nine),
        card(Suit::Clubs, Rank::Eight),
        card(Suit::Diamonds, Rank::Five),
        card(Suit::Hearts, Rank::Six), // dealer draw
    ]);

    game.deal().unwrap();
    game.check_naturals().unwrap();
    game.stand().unwrap();
    assert_eq!(game.state(), GameState::DealerTurn);

    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn, vec![card(Suit::Hearts, Rank::Six)]);
    assert!(game.dealer_hand().is_hole_revealed());

    let result = game.resolve().unwrap();
    assert_eq!(result.outcome, Outcome::Lose);
    assert_eq!(result.player_value, 18);
    assert_eq!(result.dealer_value, 20);
    assert!(result.dealer_played);
}

#[test]
fn player_beats_dealer_on_value() {
    let mut game = stacked(&[
        card(Suit::Hearts, Rank::King),
        card(Suit::Spades, Rank::Ten),
        card(Suit::Clubs, Rank::Queen),
        card(Suit::Diamonds, Rank::Six),
        card(Suit::Hearts, Rank::Three), // dealer draw
    ]);

    game.deal().unwrap();
    game.check_naturals().unwrap();
    game.stand().unwrap();
    game.dealer_play().unwrap();

    let result = game.resolve().unwrap();
    assert_eq!(result.outcome, Outcome::Win);
    assert_eq!(result.player_value, 20);
    assert_eq!(result.dealer_value, 19);
}

#[test]
fn dealer_stands_on_seventeen_including_soft() {
    for hole in [Rank::Ten, Rank::Ace] {
        let up = if hole == Rank::Ace { Rank::Six } else { Rank::Seven };
        let mut game = stacked(&[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, hole),
            card(Suit::Clubs, Rank::Seven),
            card(Suit::Diamonds, up),
            card(Suit::Hearts, Rank::Two), // never drawn
        ]);

        game.deal().unwrap();
        game.check_naturals().unwrap();
        game.stand().unwrap();
        assert!(game.dealer_play().unwrap().is_empty());
        assert_eq!(game.dealer_hand().value(), 17);
        assert_eq!(game.resolve().unwrap().outcome, Outcome::Draw);
    }
}

#[test]
fn dealer_bust_pays_player() {
    let mut game = stacked(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Two),
        card(Suit::Clubs, Rank::Eight),
        card(Suit::Diamonds, Rank::Three),
        card(Suit::Hearts, Rank::Four),
        card(Suit::Clubs, Rank::Five),
        card(Suit::Diamonds, Rank::Two),
        card(Suit::Hearts, Rank::Jack),
    ]);

    game.deal().unwrap();
    game.check_naturals().unwrap();
    game.stand().unwrap();

    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn.len(), 4);
    assert_eq!(game.dealer_hand().value(), 26);
    assert_eq!(game.resolve().unwrap().outcome, Outcome::Win);
}

#[test]
fn transitions_out_of_turn_are_rejected() {
    let mut game = Game::new(Deck::shuffled_with_seed(1));

    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.check_naturals().unwrap_err(), DealError::InvalidState);
    assert_eq!(
        game.dealer_play().unwrap_err(),
        ShowdownError::InvalidState
    );
    assert_eq!(game.resolve().unwrap_err(), ShowdownError::InvalidState);

    game.deal().unwrap();
    assert_eq!(game.deal().unwrap_err(), DealError::InvalidState);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 4);
}

#[test]
fn empty_deck_is_reported_in_every_phase() {
    let mut game = stacked(&[
        card(Suit::Hearts, Rank::Nine),
        card(Suit::Clubs, Rank::Five),
        card(Suit::Diamonds, Rank::Seven),
    ]);
    assert_eq!(game.deal().unwrap_err(), DealError::EmptyDeck);

    let opening = [
        card(Suit::Hearts, Rank::Five),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Spades, Rank::Six),
        card(Suit::Diamonds, Rank::Four),
    ];

    let mut game = stacked(&opening);
    game.deal().unwrap();
    game.check_naturals().unwrap();
    assert_eq!(game.hit().unwrap_err(), ActionError::EmptyDeck);

    let mut game = stacked(&opening);
    game.deal().unwrap();
    game.check_naturals().unwrap();
    game.stand().unwrap();
    assert_eq!(game.dealer_play().unwrap_err(), ShowdownError::EmptyDeck);
}

#[test]
fn seeded_rounds_keep_every_card_accounted_for() {
    for seed in 0..64 {
        let mut game = Game::new(Deck::shuffled_with_seed(seed));
        game.deal().unwrap();

        if !game.check_naturals().unwrap() {
            while game.state() == GameState::PlayerTurn && game.player_hand().value() < 17 {
                game.hit().unwrap();
            }
            if game.state() == GameState::PlayerTurn {
                game.stand().unwrap();
            }
        }

        if game.state() == GameState::DealerTurn {
            let opening = game.dealer_hand().cards()[..2].to_vec();
            let drawn = game.dealer_play().unwrap();

            // Every draw happened below 17, and the dealer stopped at 17+.
            let mut seen = opening;
            for card in drawn {
                assert!(hand_value(&seen) < DEALER_STANDS_ON);
                seen.push(card);
            }
            assert!(game.dealer_hand().value() >= DEALER_STANDS_ON);
        }

        assert_eq!(cards_in_play(&game), DECK_SIZE);
        game.resolve().unwrap();
        assert_eq!(game.state(), GameState::Done);
    }
}
