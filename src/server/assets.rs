//! Embedded static assets.
//!
//! The dashboard is a single self-contained page baked into flash and served
//! at `/`.  It polls `/resistance` once a second, renders the stage timers,
//! plots the resistance trace, and accumulates `(elapsed, value, stage)`
//! rows for CSV export once the session stops or finishes.  Everything in
//! here is presentation-side; the firmware never parses it.

/// Operator dashboard, served at `/`.
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0"/>
  <title>GSR Stress Monitor</title>
  <script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
  <style>
    :root {
      --primary: #3b82f6;
      --secondary: #10b981;
      --surface: #f3f4f6;
      --text: #1f2937;
      --subtext: #6b7280;
    }
    body {
      font-family: system-ui, sans-serif;
      background: #ffffff;
      color: var(--text);
      margin: 0;
      padding: 20px;
      display: flex;
      justify-content: center;
    }
    .container { width: 100%; max-width: 1100px; }
    header { text-align: center; margin-bottom: 24px; border-bottom: 1px solid var(--surface); }
    header h1 { color: var(--primary); font-weight: 600; }
    .controls { display: flex; justify-content: center; gap: 16px; margin-bottom: 24px; }
    .button {
      padding: 10px 20px; border: none; border-radius: 8px;
      font-size: 16px; cursor: pointer; font-weight: 500; color: #fff;
    }
    #startButton { background: var(--secondary); }
    #stopButton { background: #ef4444; }
    .button:disabled { opacity: 0.5; cursor: not-allowed; }
    .stage-info {
      margin-bottom: 24px; padding: 14px; border: 1px solid var(--primary);
      border-radius: 8px; background: #eff6ff;
    }
    .stage-header { display: flex; justify-content: space-between; align-items: center; }
    .stage-header h2 { margin: 0; font-size: 20px; color: var(--primary); }
    .stage-timer { font-size: 22px; font-weight: 600; color: #ef4444; }
    .progress-track { background: #e5e7eb; border-radius: 4px; height: 8px; overflow: hidden; margin-top: 10px; }
    #stageProgress { height: 100%; width: 0%; background: var(--primary); transition: width 1s linear; }
    .stats { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 16px; margin-bottom: 24px; }
    .card { background: var(--surface); padding: 18px; border-radius: 12px; text-align: center; }
    .card-title { font-size: 13px; color: var(--subtext); text-transform: uppercase; letter-spacing: 1px; }
    .card-value { font-size: 30px; font-weight: 600; }
    .chart-box { background: var(--surface); padding: 18px; border-radius: 12px; height: 380px; position: relative; }
  </style>
</head>
<body>
  <div class="container">
    <header>
      <h1>GSR Stress Monitor</h1>
      <p>Real-time Galvanic Skin Response (GSR) Monitoring</p>
    </header>

    <div class="controls">
      <button id="startButton" class="button">Start Session</button>
      <button id="stopButton" class="button" disabled>Stop &amp; Download CSV</button>
    </div>

    <div class="stage-info">
      <div class="stage-header">
        <h2>Stage: <span id="stageDescription">Waiting to start...</span></h2>
        <div class="stage-timer">Remaining: <span id="stageTimer">--:--</span></div>
      </div>
      <div class="progress-track"><div id="stageProgress"></div></div>
    </div>

    <div class="stats">
      <div class="card">
        <div class="card-title">Resistance Value</div>
        <div class="card-value" id="resistanceValue">0.00 &Omega;</div>
      </div>
      <div class="card">
        <div class="card-title">Session Elapsed Time</div>
        <div class="card-value" id="sessionTimer">00:00</div>
      </div>
    </div>

    <div class="chart-box"><canvas id="chart"></canvas></div>

    <script>
      let chart = null;
      const ctxEl = document.getElementById('chart');
      if (ctxEl && typeof Chart !== 'undefined') {
        chart = new Chart(ctxEl.getContext('2d'), {
          type: 'line',
          data: { labels: [], datasets: [{
            label: 'Resistance (Ohm)', data: [], borderColor: '#3b82f6',
            borderWidth: 2, tension: 0.3, pointRadius: 0, fill: false,
          }]},
          options: {
            responsive: true, maintainAspectRatio: false,
            plugins: { legend: { display: false } },
            scales: {
              x: { title: { display: true, text: 'Time (seconds)' } },
              y: { title: { display: true, text: 'Resistance (Ohm)' } }
            }
          }
        });
      }

      let dataLog = [];
      let sessionActive = false;
      let intervalId = null;
      let downloaded = false;

      function downloadCSV() {
        if (dataLog.length === 0 || downloaded) return;
        const csv = dataLog.reduce((acc, row) =>
          acc += `${row.elapsed},${row.value},${row.stage}\n`,
          "Time (s),Resistance (Ohm),Stage\n"
        );
        const blob = new Blob([csv], { type: "text/csv" });
        const url = URL.createObjectURL(blob);
        const a = document.createElement("a");
        a.href = url;
        a.download = "GSR_Data.csv";
        a.click();
        URL.revokeObjectURL(url);
        downloaded = true;
      }

      function formatTime(seconds) {
        const mins = Math.floor(seconds / 60);
        const secs = seconds % 60;
        return `${String(mins).padStart(2, '0')}:${String(secs).padStart(2, '0')}`;
      }

      function endSession(message) {
        sessionActive = false;
        document.getElementById("startButton").disabled = false;
        document.getElementById("stopButton").disabled = true;
        document.getElementById("stageDescription").textContent = message;
        if (intervalId) { clearInterval(intervalId); intervalId = null; }
        downloadCSV();
      }

      async function fetchData() {
        if (!sessionActive) return;
        try {
          const response = await fetch('/resistance');
          const data = await response.json();

          if (Object.keys(data).length === 0 || data.finished) {
            endSession("Session complete. Downloading data...");
            return;
          }

          document.getElementById("stageTimer").textContent = formatTime(data.remaining);
          document.getElementById("stageDescription").textContent = data.description;
          document.getElementById("sessionTimer").textContent = formatTime(data.elapsed);

          const display = data.value > 100000000
            ? (data.value / 1000000).toFixed(2) + " MΩ"
            : data.value.toFixed(2) + " Ω";
          document.getElementById("resistanceValue").textContent = display;

          const progress = (1 - (data.remaining / data.stageDuration)) * 100;
          document.getElementById("stageProgress").style.width = `${progress}%`;

          if (chart) {
            if (chart.data.labels.length >= 600) {
              chart.data.labels.shift();
              chart.data.datasets[0].data.shift();
            }
            chart.data.labels.push(data.elapsed);
            chart.data.datasets[0].data.push(data.value);
            chart.update();
          }

          dataLog.push({ elapsed: data.elapsed, value: data.value, stage: data.stage });
        } catch (error) {
          console.error('Error fetching data:', error);
        }
      }

      document.getElementById("startButton").onclick = () => {
        dataLog = [];
        downloaded = false;
        if (chart) {
          chart.data.labels = [];
          chart.data.datasets[0].data = [];
          chart.update();
        }
        fetch('/start')
          .then(() => {
            document.getElementById("startButton").disabled = true;
            document.getElementById("stopButton").disabled = false;
            sessionActive = true;
            if (!intervalId) intervalId = setInterval(fetchData, 1000);
          })
          .catch(error => console.error('Error starting session:', error));
      };

      document.getElementById("stopButton").onclick = () => {
        fetch('/stop')
          .then(() => endSession("Session stopped."))
          .catch(error => console.error('Error stopping session:', error));
      };
    </script>
</body>
</html>
"#;
