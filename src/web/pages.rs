// ============================================================
// Layer 1 — HTML Pages
// ============================================================
// Server-rendered pages, built with plain string templates.
// Small enough that a template engine would be overkill.

/// Landing page with a link to the prediction form.
pub fn index_page() -> String {
    r#"<!DOCTYPE html>
<html>
<head><title>Math Score Predictor</title></head>
<body>
  <h1>Student Math Score Predictor</h1>
  <p>Predicts a student's math score from demographic details and
     their reading and writing scores.</p>
  <p><a href="/predictdata">Go to the prediction form</a></p>
</body>
</html>"#
        .to_string()
}

/// The prediction form, with the predicted score shown above it
/// after a successful POST.
pub fn form_page(score: Option<f64>) -> String {
    let result = match score {
        Some(s) => format!("<h2>Predicted math score: {s:.2}</h2>"),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Predict Math Score</title></head>
<body>
  <h1>Predict Math Score</h1>
  {result}
  <form action="/predictdata" method="post">
    <label>Gender:
      <select name="gender" required>
        <option value="female">female</option>
        <option value="male">male</option>
      </select>
    </label><br/>
    <label>Race/Ethnicity:
      <select name="race_ethnicity" required>
        <option value="group A">group A</option>
        <option value="group B">group B</option>
        <option value="group C">group C</option>
        <option value="group D">group D</option>
        <option value="group E">group E</option>
      </select>
    </label><br/>
    <label>Parental Level of Education:
      <select name="parental_level_of_education" required>
        <option value="associate's degree">associate's degree</option>
        <option value="bachelor's degree">bachelor's degree</option>
        <option value="high school">high school</option>
        <option value="master's degree">master's degree</option>
        <option value="some college">some college</option>
        <option value="some high school">some high school</option>
      </select>
    </label><br/>
    <label>Lunch:
      <select name="lunch" required>
        <option value="standard">standard</option>
        <option value="free/reduced">free/reduced</option>
      </select>
    </label><br/>
    <label>Test Preparation Course:
      <select name="test_preparation_course" required>
        <option value="none">none</option>
        <option value="completed">completed</option>
      </select>
    </label><br/>
    <label>Reading Score:
      <input type="number" name="reading_score" min="0" max="100" step="any" required/>
    </label><br/>
    <label>Writing Score:
      <input type="number" name="writing_score" min="0" max="100" step="any" required/>
    </label><br/>
    <button type="submit">Predict</button>
  </form>
</body>
</html>"#
    )
}

/// Rendered for any handler error, with the message inline.
pub fn error_page(message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Error</title></head>
<body>
  <h1>Something went wrong</h1>
  <p>{message}</p>
  <p><a href="/predictdata">Back to the form</a></p>
</body>
</html>"#
    )
}
