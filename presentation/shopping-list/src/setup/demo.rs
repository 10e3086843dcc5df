use crate::session::error::IntoValidationMessage;
use crate::session::form::{self, ProductForm};
use crate::session::ShoppingListSession;

/// Replays a short shopping trip against `session`, printing the table after
/// each step the way a rendering surface would redraw it.
pub async fn run(session: &mut ShoppingListSession) -> anyhow::Result<()> {
    let cheese = session.add(ProductForm::new("Beyaz peynir", "1", "2")).await?;
    let bread = session.add(ProductForm::new("Ekmek", "3", "5")).await?;
    let lentils = session.add(ProductForm::new("Mercimek", "3", "4")).await?;
    print_table("All products", session)?;

    // An incomplete form is refused with a message, not admitted.
    if let Err(err) = session.add(ProductForm::new("", "1", "")).await {
        let message = err.into_validation_message();
        println!("Rejected: {} ({})", message.message, message.name);
    }

    session.set_filter(form::name_filter("mercimk")).await?;
    print_table("Name filter \"mercimk\"", session)?;

    session.set_filter(form::shop_filter("3")?).await?;
    session.set_filter(form::name_filter("")).await?;
    print_table("Shop BİM", session)?;

    session.reset_filters().await?;
    for product in [&cheese, &bread, &lentils] {
        session.toggle_bought(product.id).await?;
    }
    session.set_filter(form::status_filter("bought")?).await?;
    print_table("Bought", session)?;

    session.delete(lentils.id).await?;
    if session.take_completions() > 0 {
        println!("Shopping complete!");
    }

    session.reset_filters().await?;
    print_table("After delete", session)?;
    Ok(())
}

fn print_table(title: &str, session: &ShoppingListSession) -> anyhow::Result<()> {
    println!("== {} ==", title);
    println!("{}", serde_json::to_string_pretty(&session.rows())?);
    Ok(())
}
