//! Seed data used when nothing has been persisted yet

use chrono::{DateTime, Duration, Utc};

use crate::models::{Budget, BudgetId, Money, NewTransaction, Proverb, Transaction, TransactionId};

/// Starter transactions, newest first, dated relative to `now`
pub fn transactions(now: DateTime<Utc>) -> Vec<Transaction> {
    vec![
        NewTransaction::expense("Bubble Tea", 4500, "Food", now).into_transaction(TransactionId::from("1")),
        NewTransaction::income("Allocation Mensuelle", 325000, "Income", now)
            .into_transaction(TransactionId::from("2")),
        NewTransaction::expense("Loyer", 150000, "Bills", now).into_transaction(TransactionId::from("3")),
        NewTransaction::expense("Courses", 25000, "Food", now - Duration::days(1))
            .into_transaction(TransactionId::from("4")),
        NewTransaction::expense("Transport", 12000, "Other", now - Duration::days(2))
            .into_transaction(TransactionId::from("5")),
    ]
}

/// Starter budgets. Their running totals are preset and not derived from
/// the starter transactions.
pub fn budgets() -> Vec<Budget> {
    [
        ("1", "Alimentation", 100000, 29500, "bg-pastel-pink", "Budget pour les courses et restaurants."),
        ("2", "Sorties", 50000, 15000, "bg-pastel-yellow", "Cinémas, bars et activités de loisirs."),
        ("3", "Transport", 30000, 12000, "bg-pastel-mint", "Abonnement bus et petits trajets."),
        ("4", "Abonnements", 25000, 20000, "bg-pastel-blue", "Netflix, Spotify, et autres services."),
    ]
    .into_iter()
    .map(|(id, category, limit, current, color, description)| Budget {
        id: BudgetId::from(id),
        category: category.to_string(),
        limit: Money::new(limit),
        current: Money::new(current),
        color: color.to_string(),
        description: description.to_string(),
    })
    .collect()
}

/// The fixed proverb list; never empty
pub fn proverbs() -> Vec<Proverb> {
    [
        ("Une petite fuite peut couler un grand navire.", "Chinois"),
        ("Celui qui achète ce dont il n'a pas besoin vole lui-même.", "Japonais"),
        ("Un sou épargné est un sou gagné.", "Européen"),
        ("La richesse, c'est comme un arbre : elle commence par une petite graine.", "Africain"),
        ("Il ne faut pas manger toutes ses graines sous prétexte qu'on a faim.", "Africain"),
        ("L'argent est un bon serviteur mais un mauvais maître.", "Européen"),
        ("Le temps, c'est de l'argent.", "Européen"),
        ("Si tu veux savoir la valeur de l'argent, essaie d'en emprunter.", "Chinois"),
    ]
    .into_iter()
    .map(|(text, origin)| Proverb::new(text, origin))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::{total_balance, total_expenses, total_income};
    use chrono::SubsecRound;
    use std::collections::HashSet;

    #[test]
    fn test_seed_transactions() {
        let now = Utc::now();
        let txns = transactions(now);

        assert_eq!(txns.len(), 5);
        assert_eq!(txns[0].label, "Bubble Tea");
        assert_eq!(txns[3].date, (now - Duration::days(1)).trunc_subsecs(3));
        assert_eq!(total_income(&txns).amount(), 325000);
        assert_eq!(total_expenses(&txns).amount(), 191500);
        assert_eq!(total_balance(&txns).amount(), 133500);
    }

    #[test]
    fn test_seed_ids_unique() {
        let txn_ids: HashSet<_> = transactions(Utc::now()).into_iter().map(|t| t.id).collect();
        let budget_ids: HashSet<_> = budgets().into_iter().map(|b| b.id).collect();
        assert_eq!(txn_ids.len(), 5);
        assert_eq!(budget_ids.len(), 4);
    }

    #[test]
    fn test_seed_budgets() {
        let budgets = budgets();
        assert_eq!(budgets[0].category, "Alimentation");
        assert_eq!(budgets[0].current.amount(), 29500);
        assert_eq!(budgets[3].color, "bg-pastel-blue");
    }

    #[test]
    fn test_proverbs() {
        let proverbs = proverbs();
        assert_eq!(proverbs.len(), 8);
        assert_eq!(proverbs[6].text, "Le temps, c'est de l'argent.");
    }
}
