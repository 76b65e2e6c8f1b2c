use axum::response::Html;

/// GET /
/// Serves the letter generator form. The page drives a simple client-side
/// state machine: idle → awaiting completion (busy indicator) → ready
/// (download fired) or failed (error shown); any edit returns it to idle.
pub async fn form_handler() -> Html<&'static str> {
    Html(FORM_PAGE)
}

const FORM_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Coursemon Letter Generator</title>
<style>
  body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; padding: 0 1rem; }
  label { display: block; margin-top: 1rem; font-weight: bold; }
  input, select { width: 100%; padding: 0.4rem; margin-top: 0.25rem; box-sizing: border-box; }
  fieldset { margin-top: 1rem; }
  button { margin-top: 1.5rem; padding: 0.6rem 1.2rem; font-size: 1rem; }
  #status { margin-top: 1rem; }
  .error { color: #b00020; }
  .success { color: #1b5e20; }
  .hidden { display: none; }
</style>
</head>
<body>
<h1>📄 Coursemon Letter Generator</h1>

<form id="letter-form">
  <label for="letter_type">Letter Type</label>
  <select id="letter_type">
    <option value="employment">Employment Letter</option>
    <option value="proposal">Business Proposal</option>
    <option value="notice">Notice Letter</option>
  </select>

  <label for="recipient_name">Recipient Name</label>
  <input id="recipient_name" value="Malaika Khan">

  <label for="recipient_email">Recipient Email</label>
  <input id="recipient_email" value="malaika@example.com">

  <label for="position">Position/Role</label>
  <input id="position" value="Business Development Specialist">

  <fieldset id="equity-fieldset">
    <legend>Include Equity Offer?</legend>
    <label><input type="radio" name="include_equity" value="yes"> Yes</label>
    <label><input type="radio" name="include_equity" value="no" checked> No</label>
    <div id="equity-row" class="hidden">
      <label for="equity_percent">Equity %</label>
      <input id="equity_percent" value="5">
    </div>
  </fieldset>

  <label for="date">Date</label>
  <input id="date" type="date">

  <button type="submit" id="generate">Generate Letter with GPT</button>
</form>

<div id="status"></div>

<script>
const form = document.getElementById('letter-form');
const statusBox = document.getElementById('status');
const typeSelect = document.getElementById('letter_type');
const equityFieldset = document.getElementById('equity-fieldset');
const equityRow = document.getElementById('equity-row');

const today = new Date();
const pad = (n) => String(n).padStart(2, '0');
document.getElementById('date').value =
  `${today.getFullYear()}-${pad(today.getMonth() + 1)}-${pad(today.getDate())}`;

function syncVisibility() {
  const isEmployment = typeSelect.value === 'employment';
  equityFieldset.classList.toggle('hidden', !isEmployment);
  const includeEquity = form.elements['include_equity'].value === 'yes';
  equityRow.classList.toggle('hidden', !(isEmployment && includeEquity));
}
typeSelect.addEventListener('change', syncVisibility);
equityFieldset.addEventListener('change', syncVisibility);
form.addEventListener('input', () => { statusBox.textContent = ''; });
syncVisibility();

form.addEventListener('submit', async (event) => {
  event.preventDefault();
  const includeEquity = typeSelect.value === 'employment'
    && form.elements['include_equity'].value === 'yes';

  const request = {
    letter_type: typeSelect.value,
    recipient_name: document.getElementById('recipient_name').value,
    recipient_email: document.getElementById('recipient_email').value,
    position: document.getElementById('position').value,
    include_equity: includeEquity,
    equity_percent: includeEquity ? document.getElementById('equity_percent').value : null,
    date: document.getElementById('date').value,
  };

  statusBox.className = '';
  statusBox.textContent = 'Generating letter with GPT...';
  document.getElementById('generate').disabled = true;

  try {
    const response = await fetch('/api/v1/letters', {
      method: 'POST',
      headers: { 'content-type': 'application/json' },
      body: JSON.stringify(request),
    });

    if (!response.ok) {
      const body = await response.json().catch(() => null);
      const message = body && body.error ? body.error.message : response.statusText;
      throw new Error(message);
    }

    const disposition = response.headers.get('content-disposition') || '';
    const match = disposition.match(/filename="([^"]+)"/);
    const filename = match ? match[1] : 'Coursemon_Letter.docx';

    const blob = await response.blob();
    const url = URL.createObjectURL(blob);
    const link = document.createElement('a');
    link.href = url;
    link.download = filename;
    link.click();
    URL.revokeObjectURL(url);

    statusBox.className = 'success';
    statusBox.textContent = '✅ Letter Ready! Downloaded ' + filename;
  } catch (err) {
    statusBox.className = 'error';
    statusBox.textContent = '❌ ' + err.message;
  } finally {
    document.getElementById('generate').disabled = false;
  }
});
</script>
</body>
</html>
"#;
