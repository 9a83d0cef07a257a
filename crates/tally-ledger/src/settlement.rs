use tally_types::{ParticipantId, Record, TransferFailure, TransferOutcome, TransferRequest};

use crate::error::LedgerError;
use crate::memory::InMemoryLedger;

/// Moves value between two participants of a ledger.
///
/// The lookup and both balance writes happen under the ledger's write lock,
/// so concurrent transfers touching the same accounts cannot lose updates.
pub struct SettlementEngine<'a> {
    ledger: &'a InMemoryLedger,
}

impl<'a> SettlementEngine<'a> {
    pub fn new(ledger: &'a InMemoryLedger) -> Self {
        Self { ledger }
    }

    pub fn settle(&self, request: &TransferRequest) -> Result<TransferOutcome, LedgerError> {
        self.transfer(&request.from, &request.to, request.amount)
    }

    /// Debit `from` and credit `to` by `amount`.
    ///
    /// Refusals come back as a failed [`TransferOutcome`], never as an error;
    /// an `Err` only means the ledger itself is unusable.
    pub fn transfer(
        &self,
        from: &ParticipantId,
        to: &ParticipantId,
        amount: i64,
    ) -> Result<TransferOutcome, LedgerError> {
        let mut chain = self.ledger.write_chain()?;
        let outcome = apply_transfer(&mut chain, from, to, amount);
        match outcome.failure {
            None => tracing::info!(%from, %to, amount, "transfer settled"),
            Some(reason) => tracing::warn!(%from, %to, amount, %reason, "transfer refused"),
        }
        Ok(outcome)
    }
}

/// Single pass over the chain; the first record matching each id wins.
fn apply_transfer(
    chain: &mut [Record],
    from: &ParticipantId,
    to: &ParticipantId,
    amount: i64,
) -> TransferOutcome {
    let amount = match u64::try_from(amount) {
        Ok(a) if a > 0 => a,
        _ => return TransferOutcome::failed(TransferFailure::InvalidAmount),
    };

    let mut source = None;
    let mut destination = None;
    for (index, record) in chain.iter().enumerate() {
        if source.is_none() && record.participant_id == *from {
            if record.balance < amount {
                return TransferOutcome::failed(TransferFailure::InsufficientBalance);
            }
            source = Some(index);
        }
        if destination.is_none() && record.participant_id == *to {
            destination = Some(index);
        }
        if source.is_some() && destination.is_some() {
            break;
        }
    }

    let (Some(source), Some(destination)) = (source, destination) else {
        return TransferOutcome::failed(TransferFailure::UnknownParticipant);
    };

    if source != destination && chain[destination].balance.checked_add(amount).is_none() {
        return TransferOutcome::failed(TransferFailure::BalanceOverflow);
    }

    chain[source].balance -= amount;
    chain[destination].balance += amount;
    TransferOutcome::settled()
}

#[cfg(test)]
mod tests {
    use std::thread;

    use proptest::prelude::*;
    use tally_types::CreatedAt;

    use super::*;
    use crate::genesis::{build_successor, GenesisConfig};
    use crate::traits::{LedgerReader, LedgerWriter};

    struct Fixture {
        ledger: InMemoryLedger,
        issuer: ParticipantId,
        alice: ParticipantId,
    }

    fn fixture() -> Fixture {
        let ledger = InMemoryLedger::new(&GenesisConfig::default()).unwrap();
        let issuer = ledger.current_tail().unwrap().participant_id;
        let alice = ledger.register("alice").unwrap().into_record().participant_id;
        Fixture { ledger, issuer, alice }
    }

    fn balance(ledger: &InMemoryLedger, id: &ParticipantId) -> u64 {
        ledger.find(id).unwrap().unwrap().balance
    }

    #[test]
    fn issuer_funds_new_participant() {
        let f = fixture();
        let engine = SettlementEngine::new(&f.ledger);

        let outcome = engine.transfer(&f.issuer, &f.alice, 100).unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.message, "transaction successful");
        assert_eq!(balance(&f.ledger, &f.issuer), 900);
        assert_eq!(balance(&f.ledger, &f.alice), 100);

        let outcome = engine.transfer(&f.alice, &f.issuer, 5000).unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.message, "insufficient balance");
        assert_eq!(balance(&f.ledger, &f.issuer), 900);
        assert_eq!(balance(&f.ledger, &f.alice), 100);
    }

    #[test]
    fn unknown_destination_fails_without_mutation() {
        let f = fixture();
        let engine = SettlementEngine::new(&f.ledger);
        let ghost = ParticipantId::generate();

        let outcome = engine.transfer(&f.issuer, &ghost, 10).unwrap();
        assert_eq!(outcome.failure, Some(TransferFailure::UnknownParticipant));
        assert_eq!(outcome.message, "transaction failed");
        assert_eq!(balance(&f.ledger, &f.issuer), 1000);
    }

    #[test]
    fn unknown_source_fails_without_mutation() {
        let f = fixture();
        let engine = SettlementEngine::new(&f.ledger);
        let outcome = engine.transfer(&ParticipantId::generate(), &f.alice, 10).unwrap();
        assert_eq!(outcome.message, "transaction failed");
        assert_eq!(balance(&f.ledger, &f.alice), 0);
    }

    #[test]
    fn insufficient_balance_wins_over_unknown_destination() {
        let f = fixture();
        let engine = SettlementEngine::new(&f.ledger);
        let outcome = engine.transfer(&f.alice, &ParticipantId::generate(), 1).unwrap();
        assert_eq!(outcome.failure, Some(TransferFailure::InsufficientBalance));
    }

    #[test]
    fn non_positive_amounts_rejected() {
        let f = fixture();
        let engine = SettlementEngine::new(&f.ledger);
        for amount in [0, -1, -500, i64::MIN] {
            let outcome = engine.transfer(&f.alice, &f.issuer, amount).unwrap();
            assert_eq!(outcome.failure, Some(TransferFailure::InvalidAmount));
        }
        assert_eq!(balance(&f.ledger, &f.issuer), 1000);
        assert_eq!(balance(&f.ledger, &f.alice), 0);
    }

    #[test]
    fn self_transfer_nets_to_zero() {
        let f = fixture();
        let engine = SettlementEngine::new(&f.ledger);
        let outcome = engine.transfer(&f.issuer, &f.issuer, 400).unwrap();
        assert!(outcome.success);
        assert_eq!(balance(&f.ledger, &f.issuer), 1000);

        let outcome = engine.transfer(&f.issuer, &f.issuer, 1001).unwrap();
        assert_eq!(outcome.failure, Some(TransferFailure::InsufficientBalance));
    }

    #[test]
    fn credit_overflow_refused_before_debit() {
        let genesis = GenesisConfig {
            issuer_name: "issuer".into(),
            initial_supply: 100,
        }
        .build(CreatedAt::now())
        .unwrap();
        let payer = genesis.participant_id.clone();
        let mut whale = build_successor(&genesis, "whale", CreatedAt::now());
        whale.balance = u64::MAX - 5;
        let whale_id = whale.participant_id.clone();
        let mut chain = vec![genesis, whale];

        let outcome = apply_transfer(&mut chain, &payer, &whale_id, 10);
        assert!(!outcome.success);
        assert_eq!(outcome.failure, Some(TransferFailure::BalanceOverflow));
        assert_eq!(outcome.message, "balance overflow");
        assert_eq!(chain[0].balance, 100);
        assert_eq!(chain[1].balance, u64::MAX - 5);

        let outcome = apply_transfer(&mut chain, &payer, &whale_id, 5);
        assert!(outcome.success);
        assert_eq!(chain[0].balance, 95);
        assert_eq!(chain[1].balance, u64::MAX);
    }

    #[test]
    fn duplicate_ids_resolve_to_first_match() {
        let f = fixture();
        let mut chain = f.ledger.snapshot().unwrap();
        let mut twin = build_successor(&chain[1], "twin", CreatedAt::now());
        twin.participant_id = f.alice.clone();
        chain.push(twin);

        let outcome = apply_transfer(&mut chain, &f.issuer, &f.alice, 50);
        assert!(outcome.success);
        assert_eq!(chain[1].balance, 50);
        assert_eq!(chain[2].balance, 0);
    }

    #[test]
    fn settle_uses_request_fields() {
        let f = fixture();
        let engine = SettlementEngine::new(&f.ledger);
        let request = TransferRequest {
            from: f.issuer.clone(),
            to: f.alice.clone(),
            amount: 250,
        };
        assert!(engine.settle(&request).unwrap().success);
        assert_eq!(balance(&f.ledger, &f.alice), 250);
    }

    #[test]
    fn concurrent_transfers_lose_no_updates() {
        let f = fixture();
        SettlementEngine::new(&f.ledger).transfer(&f.issuer, &f.alice, 500).unwrap();

        thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    let engine = SettlementEngine::new(&f.ledger);
                    for _ in 0..50 {
                        assert!(engine.transfer(&f.issuer, &f.alice, 1).unwrap().success);
                    }
                });
                s.spawn(|| {
                    let engine = SettlementEngine::new(&f.ledger);
                    for _ in 0..25 {
                        assert!(engine.transfer(&f.alice, &f.issuer, 2).unwrap().success);
                    }
                });
            }
        });

        // each pair of workers moves 50 one way and 50 back
        assert_eq!(balance(&f.ledger, &f.issuer), 500);
        assert_eq!(balance(&f.ledger, &f.alice), 500);
    }

    proptest! {
        #[test]
        fn balances_are_conserved(amounts in proptest::collection::vec(-50i64..400, 1..40)) {
            let f = fixture();
            let engine = SettlementEngine::new(&f.ledger);
            for (i, amount) in amounts.into_iter().enumerate() {
                let (from, to) = if i % 2 == 0 { (&f.issuer, &f.alice) } else { (&f.alice, &f.issuer) };
                let before = (balance(&f.ledger, from), balance(&f.ledger, to));
                let outcome = engine.transfer(from, to, amount).unwrap();
                let after = (balance(&f.ledger, from), balance(&f.ledger, to));
                prop_assert_eq!(before.0 + before.1, after.0 + after.1);
                if !outcome.success {
                    prop_assert_eq!(before, after);
                }
                if amount > before.0 as i64 {
                    prop_assert!(!outcome.success);
                }
            }
        }
    }
}
